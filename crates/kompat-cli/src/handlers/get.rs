//! The get command: fetch, validate, and render compatibility documents

use crate::cli::{GetArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::fetch;
use crate::output::{plain_table, Column, OutputWriter, Tabular};
use kompat_core::{parse_sources, KompatList, Options, DEFAULT_FILE_NAME};
use tracing::{debug, info};

/// Handle the get command
pub async fn handle_get(
    mut args: GetArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    config.apply_to(&mut args);
    if args.sources.is_empty() {
        args.sources.push(DEFAULT_FILE_NAME.to_string());
    }
    info!(sources = ?args.sources, "reading compatibility documents");

    let spinner = if args.sources.iter().any(|s| fetch::is_remote(s)) {
        output.spinner("Fetching compatibility documents...")
    } else {
        None
    };
    let fetched = fetch::fetch_all(&args.sources).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let records = parse_sources(&fetched?)?;
    debug!(records = records.len(), "validated compatibility records");

    let options = Options {
        last_n: args.last.unwrap_or(0),
        version: args.k8s_version.clone(),
    };

    match output.format() {
        OutputFormat::Json => output.write(&records.to_json()?),
        OutputFormat::Yaml => output.write(&records.to_yaml()?),
        OutputFormat::Markdown => output.write(&records.to_markdown(&options)),
        OutputFormat::Table => output.write(&plain_table(&entry_rows(&records), false)),
        OutputFormat::Wide => output.write(&plain_table(&entry_rows(&records), true)),
    }
}

/// One plain-table row per declared compatibility entry
struct EntryRow {
    app_name: String,
    app_version: String,
    min_k8s_version: String,
    max_k8s_version: String,
    covered: String,
}

impl Tabular for EntryRow {
    fn columns() -> &'static [Column] {
        &[
            Column { header: "App", wide_only: false },
            Column { header: "App Version", wide_only: false },
            Column { header: "Min K8s", wide_only: false },
            Column { header: "Max K8s", wide_only: false },
            Column { header: "K8s Versions", wide_only: true },
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.app_name.clone(),
            self.app_version.clone(),
            self.min_k8s_version.clone(),
            self.max_k8s_version.clone(),
            self.covered.clone(),
        ]
    }
}

fn entry_rows(records: &KompatList) -> Vec<EntryRow> {
    let mut rows = Vec::new();
    for record in records.iter() {
        for entry in &record.compatibility {
            rows.push(EntryRow {
                app_name: record.app_name.clone(),
                app_version: entry.app_version.clone(),
                min_k8s_version: entry.min_k8s_version.clone(),
                max_k8s_version: entry.max_k8s_version.clone(),
                covered: entry.k8s_versions().join(", "),
            });
        }
    }
    rows
}
