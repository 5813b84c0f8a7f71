//! kompat-core - compatibility-matrix parsing, expansion, and rendering
//!
//! This crate turns declarative compatibility documents (mapping an
//! application's releases to the Kubernetes versions each one supports) into
//! validated records and rendered matrices.
//!
//! # Main Components
//!
//! - **Version handling**: tolerant semantic-version parsing, `.x` wildcard
//!   normalization, and the digit-concatenation Kubernetes ordering
//! - **Document parsing**: multi-document YAML decoding with fail-fast
//!   validation of every version field
//! - **Matrix building**: sparse range expansion, display-range collapsing,
//!   and multi-document merging over a shared sorted column set
//! - **Renderers**: JSON, YAML, and Markdown output
//!
//! The library is pure: it consumes already-fetched bytes and produces
//! strings. Fetching, flag parsing, and process exit live in the CLI crate.

pub mod error;
pub mod matrix;
pub mod parser;
pub mod render;
pub mod types;
pub mod version;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use matrix::{MatrixTable, Options};
pub use parser::{parse_documents, parse_sources};
pub use types::{Compatibility, Kompat, KompatList};

/// Default document name, looked up in the working directory and appended to
/// repository URLs
pub const DEFAULT_FILE_NAME: &str = "compatibility.yaml";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
