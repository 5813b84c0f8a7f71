//! Data model for compatibility documents
//!
//! These structs mirror the YAML/JSON wire format exactly; serialized field
//! names are stable and consumed by published matrices.

use crate::error::{Error, Result};
use crate::version::{self, Version};
use serde::{Deserialize, Serialize};

/// One application's compatibility matrix, decoded from a single YAML document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kompat {
    /// Application name used in row headers
    #[serde(default)]
    pub app_name: String,

    /// Declared version ranges, in authored order
    #[serde(default)]
    pub compatibility: Vec<Compatibility>,
}

/// A single declared range: one app version and the Kubernetes versions it
/// supports, bounds inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    /// Application release version; may carry a `.x` minor wildcard
    pub app_version: String,

    /// Lowest supported Kubernetes version (`major.minor`)
    pub min_k8s_version: String,

    /// Highest supported Kubernetes version (`major.minor`)
    pub max_k8s_version: String,
}

/// A set of compatibility documents rendered together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KompatList(pub Vec<Kompat>);

impl Kompat {
    /// Check every version field of every entry, after wildcard normalization.
    ///
    /// All three fields must parse as semantic versions, and a range minimum
    /// may not sort after its maximum within the same major release line
    /// (bounds whose major components disagree are left to the expander,
    /// which only honors the minimum's major).
    pub fn validate(&self) -> Result<()> {
        for entry in &self.compatibility {
            self.checked_version("appVersion", &entry.app_version)?;
            let min = self.checked_version("minK8sVersion", &entry.min_k8s_version)?;
            let max = self.checked_version("maxK8sVersion", &entry.max_k8s_version)?;

            if min.major == max.major && min > max {
                return Err(Error::Validation {
                    app_name: self.app_name.clone(),
                    field: "minK8sVersion".to_string(),
                    value: entry.min_k8s_version.clone(),
                    source: Box::new(Error::InvertedRange {
                        min: entry.min_k8s_version.clone(),
                        max: entry.max_k8s_version.clone(),
                    }),
                });
            }
        }
        Ok(())
    }

    fn checked_version(&self, field: &'static str, value: &str) -> Result<Version> {
        Version::parse(&version::normalize(value)).map_err(|e| Error::Validation {
            app_name: self.app_name.clone(),
            field: field.to_string(),
            value: value.to_string(),
            source: Box::new(e),
        })
    }
}

impl std::ops::Deref for KompatList {
    type Target = [Kompat];

    fn deref(&self) -> &[Kompat] {
        &self.0
    }
}

impl From<Vec<Kompat>> for KompatList {
    fn from(records: Vec<Kompat>) -> Self {
        Self(records)
    }
}
