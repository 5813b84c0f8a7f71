//! Multi-document YAML decoding and validation
//!
//! A single source may hold several `---`-separated documents; each decodes
//! into one [`Kompat`] record. Decoding and validation are fail-fast: the
//! first error aborts the whole parse and no partial results are returned.

use crate::error::{Error, Result};
use crate::types::{Kompat, KompatList};
use serde::Deserialize;
use tracing::debug;

/// Decode every document in `bytes`, validating each record.
///
/// `source` names the input in error messages; records are returned in
/// document order.
pub fn parse_documents(bytes: &[u8], source: &str) -> Result<Vec<Kompat>> {
    let mut records = Vec::new();
    for document in serde_yaml::Deserializer::from_slice(bytes) {
        let record = Kompat::deserialize(document).map_err(|e| Error::Decode {
            source_name: source.to_string(),
            source: e,
        })?;
        record.validate()?;
        records.push(record);
    }
    debug!(source, records = records.len(), "decoded compatibility documents");
    Ok(records)
}

/// Parse multiple already-fetched sources, concatenating their records.
///
/// Documents from earlier sources precede those from later ones; any failure
/// aborts the whole parse.
pub fn parse_sources(sources: &[(String, Vec<u8>)]) -> Result<KompatList> {
    let mut records = Vec::new();
    for (name, bytes) in sources {
        records.extend(parse_documents(bytes, name)?);
    }
    Ok(KompatList(records))
}
