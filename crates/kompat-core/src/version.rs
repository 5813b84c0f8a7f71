//! Semantic-version parsing and ordering for compatibility documents
//!
//! Application versions are semantic versions, optionally carrying a trailing
//! `.x` wildcard on the minor component (`"2.3.x"`); the wildcard is stripped
//! before parsing and kept only for display. Kubernetes versions are
//! two-component `major.minor` strings and sort by digit concatenation, not
//! by semver precedence.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Strip every literal `.x` wildcard marker from a version string.
///
/// Non-wildcard strings pass through unchanged. Display code keeps the
/// original literal; only validation and comparison see the normalized form.
pub fn normalize(version: &str) -> String {
    version.replace(".x", "")
}

/// Parsed semantic version, tolerant of a missing minor or patch component
/// (`"1"`, `"1.21"`, and `"1.21.3"` all parse; missing components read as 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
}

impl Version {
    /// Parse a normalized version string.
    ///
    /// Accepts an optional `v` prefix, up to three dot-separated numeric
    /// components, an optional `-pre` tag, and an optional `+build` suffix
    /// (ignored for ordering).
    pub fn parse(input: &str) -> Result<Self> {
        let stripped = input.trim();
        let stripped = stripped.strip_prefix('v').unwrap_or(stripped);

        // Build metadata does not participate in ordering
        let without_build = match stripped.find('+') {
            Some(pos) => &stripped[..pos],
            None => stripped,
        };

        let (numbers, pre_release) = match without_build.find('-') {
            Some(pos) => (
                &without_build[..pos],
                Some(without_build[pos + 1..].to_string()),
            ),
            None => (without_build, None),
        };

        if numbers.is_empty() {
            return Err(Error::invalid_version(input, "no digits found"));
        }

        let parts: Vec<&str> = numbers.split('.').collect();
        if parts.len() > 3 {
            return Err(Error::invalid_version(
                input,
                format!("expected at most 3 components, found {}", parts.len()),
            ));
        }

        let component = |idx: usize, name: &str| -> Result<u64> {
            match parts.get(idx) {
                None => Ok(0),
                Some(p) => p.parse().map_err(|_| {
                    Error::invalid_version(input, format!("{} component \"{}\" is not a number", name, p))
                }),
            }
        };

        Ok(Self {
            major: component(0, "major")?,
            minor: component(1, "minor")?,
            patch: component(2, "patch")?,
            pre_release,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                // A pre-release sorts before its release
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

/// Ordering for app-version strings, wildcard-tolerant.
///
/// Inputs must already have passed validation; unparseable input aborts,
/// matching the fail-fast sort in the rendering path.
pub fn compare(a: &str, b: &str) -> Ordering {
    let left = Version::parse(&normalize(a)).expect("app version validated before sorting");
    let right = Version::parse(&normalize(b)).expect("app version validated before sorting");
    left.cmp(&right)
}

/// Ordering for two-component Kubernetes versions.
///
/// Dots are stripped and the remaining digit strings compared as integers:
/// `"1.9" < "1.10"` because 19 < 110. This is not semver precedence; rendered
/// column order depends on this exact rule.
pub fn compare_k8s(a: &str, b: &str) -> Ordering {
    let left: u64 = a
        .replace('.', "")
        .parse()
        .expect("k8s version validated before sorting");
    let right: u64 = b
        .replace('.', "")
        .parse()
        .expect("k8s version validated before sorting");
    left.cmp(&right)
}
