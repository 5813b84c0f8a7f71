//! Output formatting and writing utilities
//!
//! Rendered matrices go to stdout; informational messages only appear in the
//! human table formats so machine output stays clean. The plain-table writer
//! consumes the [`Tabular`] contract: a fixed, ordered column list with
//! wide-only markers, instead of inspecting row types at runtime.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

/// Column in a plain-table listing
pub struct Column {
    /// Header label, upper-cased on render
    pub header: &'static str,
    /// Only shown in wide mode
    pub wide_only: bool,
}

/// Fixed, ordered column contract for plain-table rows
pub trait Tabular {
    /// Column set, in display order
    fn columns() -> &'static [Column];

    /// Cell values aligned to `columns()`, including wide-only ones
    fn cells(&self) -> Vec<String>;
}

/// Render rows as a tab-padded, borderless, left-aligned listing.
///
/// Wide-only columns are skipped unless `wide` is set; headers render even
/// when there are no rows.
pub fn plain_table<T: Tabular>(rows: &[T], wide: bool) -> String {
    let selected: Vec<usize> = T::columns()
        .iter()
        .enumerate()
        .filter(|(_, column)| wide || !column.wide_only)
        .map(|(i, _)| i)
        .collect();

    let headers: Vec<String> = selected
        .iter()
        .map(|&i| T::columns()[i].header.to_uppercase())
        .collect();
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let cells = row.cells();
            selected
                .iter()
                .map(|&i| cells.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &table_rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    for row in &table_rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("\t").trim_end());
    out.push('\n');
}

/// Output writer that handles format selection, colors, and quiet mode
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    show_progress: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            show_progress: !quiet && io::stdout().is_terminal(),
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(format: OutputFormat, use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color,
            quiet,
            show_progress: false,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    #[allow(dead_code)]
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human formats only)
    #[allow(dead_code)]
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human formats only)
    #[allow(dead_code)]
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    fn is_human(&self) -> bool {
        matches!(self.format, OutputFormat::Table | OutputFormat::Wide)
    }
}

/// Helper function to create a spinner style
fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        app: &'static str,
        version: &'static str,
        detail: &'static str,
    }

    impl Tabular for Row {
        fn columns() -> &'static [Column] {
            &[
                Column { header: "App", wide_only: false },
                Column { header: "Version", wide_only: false },
                Column { header: "Detail", wide_only: true },
            ]
        }

        fn cells(&self) -> Vec<String> {
            vec![
                self.app.to_string(),
                self.version.to_string(),
                self.detail.to_string(),
            ]
        }
    }

    #[test]
    fn test_plain_table_short_skips_wide_columns() {
        let rows = [Row {
            app: "karpenter",
            version: "0.28.x",
            detail: "1.21, 1.22",
        }];
        let table = plain_table(&rows, false);
        assert!(table.contains("APP"));
        assert!(table.contains("VERSION"));
        assert!(!table.contains("DETAIL"));
        assert!(!table.contains("1.21, 1.22"));
    }

    #[test]
    fn test_plain_table_wide_includes_wide_columns() {
        let rows = [Row {
            app: "karpenter",
            version: "0.28.x",
            detail: "1.21, 1.22",
        }];
        let table = plain_table(&rows, true);
        assert!(table.contains("DETAIL"));
        assert!(table.contains("1.21, 1.22"));
    }

    #[test]
    fn test_plain_table_pads_to_widest_cell() {
        let rows = [
            Row { app: "a", version: "1.0", detail: "" },
            Row { app: "longer-name", version: "2.0", detail: "" },
        ];
        let table = plain_table(&rows, false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        // Every VERSION cell starts at the same padded offset
        let offsets: Vec<usize> = lines
            .iter()
            .map(|l| l.find('\t').expect("tab separator present"))
            .collect();
        assert!(offsets.iter().all(|&o| o == offsets[0]));
    }

    #[test]
    fn test_headers_render_without_rows() {
        let rows: [Row; 0] = [];
        let table = plain_table(&rows, false);
        assert_eq!(table, "APP\tVERSION\n");
    }

    #[test]
    fn test_machine_formats_suppress_info() {
        let mut writer =
            OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(Vec::new()));
        writer.info("should not appear").unwrap();
    }
}
