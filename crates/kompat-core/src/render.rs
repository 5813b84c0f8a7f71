//! Output encoders: JSON, YAML, and the Markdown grid
//!
//! A single record encodes as a bare object, multiple records as a list of
//! the same shape. JSON uses 4-space indentation and a trailing newline;
//! both properties are relied on by published matrices.

use crate::error::Result;
use crate::matrix::{MatrixTable, Options};
use crate::types::{Kompat, KompatList};
use serde::Serialize;

fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
}

impl Kompat {
    /// JSON document for this record
    pub fn to_json(&self) -> Result<String> {
        encode_json(self)
    }

    /// YAML document for this record
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Markdown grid for this record's authored ranges
    pub fn to_markdown(&self) -> String {
        markdown(&self.matrix())
    }
}

impl KompatList {
    /// JSON for the whole set; one record renders as a bare object
    pub fn to_json(&self) -> Result<String> {
        match &**self {
            [only] => encode_json(only),
            _ => encode_json(self),
        }
    }

    /// YAML for the whole set; one record renders as a bare object
    pub fn to_yaml(&self) -> Result<String> {
        match &**self {
            [only] => Ok(serde_yaml::to_string(only)?),
            _ => Ok(serde_yaml::to_string(self)?),
        }
    }

    /// Markdown grid for the merged matrix
    pub fn to_markdown(&self, options: &Options) -> String {
        markdown(&self.matrix(options))
    }
}

/// Render a matrix as a pipe-delimited grid with one header separator row.
///
/// Columns are padded to their widest cell and left-justified; nothing is
/// wrapped. An empty matrix renders as an empty string.
pub fn markdown(table: &MatrixTable) -> String {
    if table.is_empty() {
        return String::new();
    }
    let mut widths: Vec<usize> = table.header.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &table.header, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);
    for row in &table.rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (i, &width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        out.push_str(&format!(" {cell:<width$} |"));
    }
    out.push('\n');
}
