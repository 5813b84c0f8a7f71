//! Range expansion, collapsing, and matrix assembly
//!
//! Each record's sparse (app version, min/max Kubernetes version) entries
//! expand into a dense map from every covered Kubernetes version to the app
//! versions supporting it. The merger computes a shared, sorted column set
//! across records and re-collapses each bucket into a compact display range
//! (`"1.2"`, `"1.2 - 1.5"`, or `"1.2+"` when the range reaches the newest
//! known app version).

use crate::types::{Compatibility, Kompat, KompatList};
use crate::version;
use std::collections::HashMap;
use tracing::trace;

/// Narrowing options for the merged column set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Keep only the trailing N columns of the sorted union; 0 keeps all
    pub last_n: usize,

    /// Keep exactly this Kubernetes version; when it is absent from the
    /// union the result is empty, which is a valid outcome and not an error
    pub version: Option<String>,
}

/// Header and rows of a rendered matrix, consumable by any rows-of-strings
/// table writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MatrixTable {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

impl Compatibility {
    /// Kubernetes versions covered by this entry: `min.minor ..= max.minor`
    /// under the major component of the minimum bound.
    ///
    /// The maximum's major is ignored; bounds that disagree on major expand
    /// under the minimum's major only, so a range like `1.24 - 2.2` yields
    /// nothing. Existing published matrices depend on this behavior.
    pub fn k8s_versions(&self) -> Vec<String> {
        let major = self
            .min_k8s_version
            .split('.')
            .next()
            .unwrap_or(&self.min_k8s_version);
        let min_minor = minor_component(&self.min_k8s_version);
        let max_minor = minor_component(&self.max_k8s_version);
        (min_minor..=max_minor)
            .map(|minor| format!("{major}.{minor}"))
            .collect()
    }
}

/// Minor component of a `major.minor` string; a missing minor reads as 0.
fn minor_component(v: &str) -> u64 {
    v.split('.').nth(1).and_then(|m| m.parse().ok()).unwrap_or(0)
}

impl Kompat {
    /// Map each covered Kubernetes version to the app versions supporting it.
    ///
    /// Buckets are filled in entry order and keep duplicates; deduplication
    /// happens when the display universe is computed, not here.
    pub fn expand(&self) -> HashMap<String, Vec<String>> {
        let mut expanded: HashMap<String, Vec<String>> = HashMap::new();
        for entry in &self.compatibility {
            for k8s in entry.k8s_versions() {
                expanded
                    .entry(k8s)
                    .or_default()
                    .push(entry.app_version.clone());
            }
        }
        expanded
    }

    /// App versions that cover at least one Kubernetes version, first
    /// occurrence kept, in entry order. This is the deduplicated universe
    /// used for `"+"` detection; an entry whose range expands to nothing
    /// contributes nothing.
    pub fn app_versions(&self) -> Vec<String> {
        let mut universe: Vec<String> = Vec::new();
        for entry in &self.compatibility {
            if entry.k8s_versions().is_empty() {
                continue;
            }
            if !universe.contains(&entry.app_version) {
                universe.push(entry.app_version.clone());
            }
        }
        universe
    }

    /// Single-record table: ranges exactly as authored, no expansion
    pub fn matrix(&self) -> MatrixTable {
        let mut header = vec!["K8s Versions".to_string()];
        let mut row = vec![format!("{} Versions", self.app_name)];
        for entry in &self.compatibility {
            header.push(format!(
                "{} - {}",
                entry.min_k8s_version, entry.max_k8s_version
            ));
            row.push(entry.app_version.clone());
        }
        MatrixTable {
            header,
            rows: vec![row],
        }
    }
}

impl KompatList {
    /// Sorted union of every Kubernetes version covered by any record
    pub fn k8s_versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = Vec::new();
        for record in self.iter() {
            for k8s in record.expand().into_keys() {
                if !versions.contains(&k8s) {
                    versions.push(k8s);
                }
            }
        }
        versions.sort_by(|a, b| version::compare_k8s(a, b));
        versions
    }

    /// Multi-record table over the shared sorted column set, narrowed by
    /// `options`. A single record renders in its compact authored form and
    /// ignores narrowing, matching the published single-app tables.
    pub fn matrix(&self, options: &Options) -> MatrixTable {
        if self.len() == 1 {
            return self[0].matrix();
        }

        let all_versions = self.k8s_versions();
        let mut header = vec!["K8s Versions".to_string()];
        if let Some(requested) = &options.version {
            match all_versions.iter().find(|v| *v == requested) {
                Some(found) => header.push(found.clone()),
                None => {
                    trace!(%requested, "requested k8s version absent from union");
                    return MatrixTable::default();
                }
            }
        } else if options.last_n != 0 {
            let skip = all_versions.len().saturating_sub(options.last_n);
            header.extend(all_versions.iter().skip(skip).cloned());
        } else {
            header.extend(all_versions.iter().cloned());
        }

        let mut rows = Vec::new();
        for record in self.iter() {
            let expanded = record.expand();
            let universe = record.app_versions();
            let mut row = vec![format!("{} Versions", record.app_name)];
            for column in &header[1..] {
                let supported = expanded.get(column).map(Vec::as_slice).unwrap_or(&[]);
                row.push(display_range(supported, &universe));
            }
            rows.push(row);
        }
        MatrixTable { header, rows }
    }
}

/// Collapse one column's supporting versions into a display string.
///
/// An empty set renders empty; a single version renders verbatim. Otherwise
/// the set is sorted ascending and shown as `"min - max"`, or `"min+"` when
/// its maximum is also the newest version in `universe`. The universe must
/// already be deduplicated; this function does not dedupe.
pub fn display_range(versions: &[String], universe: &[String]) -> String {
    if versions.is_empty() {
        return String::new();
    }
    if versions.len() == 1 {
        return versions[0].clone();
    }
    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| version::compare(a, b));
    let newest = &sorted[sorted.len() - 1];
    if !universe.is_empty() {
        let mut all = universe.to_vec();
        all.sort_by(|a, b| version::compare(a, b));
        if &all[all.len() - 1] == newest {
            return format!("{}+", sorted[0]);
        }
    }
    format!("{} - {}", sorted[0], newest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(app: &str, min: &str, max: &str) -> Compatibility {
        Compatibility {
            app_version: app.to_string(),
            min_k8s_version: min.to_string(),
            max_k8s_version: max.to_string(),
        }
    }

    fn record(name: &str, entries: Vec<Compatibility>) -> Kompat {
        Kompat {
            app_name: name.to_string(),
            compatibility: entries,
        }
    }

    #[test]
    fn test_expansion_spans_bounds_inclusive() {
        let covered = entry("1.0", "1.20", "1.24").k8s_versions();
        assert_eq!(covered, vec!["1.20", "1.21", "1.22", "1.23", "1.24"]);
    }

    #[test]
    fn test_expansion_single_version_range() {
        assert_eq!(entry("1.0", "1.21", "1.21").k8s_versions(), vec!["1.21"]);
    }

    #[test]
    fn test_expansion_ignores_max_major() {
        // Major comes from the minimum bound only; 24..=2 is an empty span
        assert!(entry("1.0", "1.24", "2.2").k8s_versions().is_empty());
    }

    #[test]
    fn test_expand_buckets_keep_entry_order() {
        let kompat = record(
            "app",
            vec![entry("1.0", "1.20", "1.21"), entry("1.1", "1.21", "1.22")],
        );
        let expanded = kompat.expand();
        assert_eq!(expanded["1.20"], vec!["1.0"]);
        assert_eq!(expanded["1.21"], vec!["1.0", "1.1"]);
        assert_eq!(expanded["1.22"], vec!["1.1"]);
    }

    #[test]
    fn test_app_versions_deduplicates_in_order() {
        let kompat = record(
            "app",
            vec![
                entry("1.0", "1.20", "1.21"),
                entry("1.1", "1.21", "1.22"),
                entry("1.0", "1.23", "1.23"),
            ],
        );
        assert_eq!(kompat.app_versions(), vec!["1.0", "1.1"]);
    }

    #[test]
    fn test_app_versions_skip_entries_with_empty_coverage() {
        // The cross-major entry lands in no bucket, so it is not part of
        // the universe that drives "+" detection
        let kompat = record(
            "app",
            vec![entry("1.0", "1.20", "1.21"), entry("9.9", "1.24", "2.2")],
        );
        assert_eq!(kompat.app_versions(), vec!["1.0"]);
    }

    #[test]
    fn test_display_range_empty_and_single() {
        assert_eq!(display_range(&[], &[]), "");
        let one = vec!["1.2".to_string()];
        assert_eq!(display_range(&one, &[]), "1.2");
    }

    #[test]
    fn test_display_range_closed() {
        let versions: Vec<String> = ["1.1", "1.0"].iter().map(|s| s.to_string()).collect();
        let universe: Vec<String> = ["1.0", "1.1", "1.2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(display_range(&versions, &universe), "1.0 - 1.1");
    }

    #[test]
    fn test_display_range_open_at_universe_max() {
        let versions: Vec<String> = ["1.1", "1.2"].iter().map(|s| s.to_string()).collect();
        let universe: Vec<String> = ["1.0", "1.1", "1.2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(display_range(&versions, &universe), "1.1+");
    }

    #[test]
    fn test_collapse_round_trips_expansion() {
        let covered = entry("1.0", "1.20", "1.24").k8s_versions();
        assert_eq!(display_range(&covered, &[]), "1.20 - 1.24");
    }

    #[test]
    fn test_union_is_sorted_across_records() {
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.20", "1.21")]),
            record("b", vec![entry("2.0", "1.21", "1.22")]),
        ]);
        assert_eq!(list.k8s_versions(), vec!["1.20", "1.21", "1.22"]);
    }

    #[test]
    fn test_union_orders_two_digit_minors_numerically() {
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.9", "1.10")]),
        ]);
        assert_eq!(list.k8s_versions(), vec!["1.9", "1.10"]);
    }

    #[test]
    fn test_merge_fills_unsupported_columns_with_empty() {
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.20", "1.21")]),
            record("b", vec![entry("2.0", "1.21", "1.22")]),
        ]);
        let table = list.matrix(&Options::default());
        assert_eq!(table.header, vec!["K8s Versions", "1.20", "1.21", "1.22"]);
        assert_eq!(table.rows[0], vec!["a Versions", "1.0", "1.0", ""]);
        assert_eq!(table.rows[1], vec!["b Versions", "", "2.0", "2.0"]);
    }

    #[test]
    fn test_merge_last_n_keeps_trailing_columns() {
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.20", "1.23")]),
            record("b", vec![entry("2.0", "1.21", "1.23")]),
        ]);
        let table = list.matrix(&Options {
            last_n: 2,
            version: None,
        });
        assert_eq!(table.header, vec!["K8s Versions", "1.22", "1.23"]);
    }

    #[test]
    fn test_merge_version_filter() {
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.20", "1.23")]),
            record("b", vec![entry("2.0", "1.21", "1.23")]),
        ]);
        let table = list.matrix(&Options {
            last_n: 0,
            version: Some("1.21".to_string()),
        });
        assert_eq!(table.header, vec!["K8s Versions", "1.21"]);
        assert_eq!(table.rows[0], vec!["a Versions", "1.0"]);
        assert_eq!(table.rows[1], vec!["b Versions", "2.0"]);
    }

    #[test]
    fn test_merge_version_filter_absent_is_empty() {
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.20", "1.23")]),
            record("b", vec![entry("2.0", "1.21", "1.23")]),
        ]);
        let table = list.matrix(&Options {
            last_n: 0,
            version: Some("1.99".to_string()),
        });
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_record_matrix_shows_authored_ranges() {
        let list = KompatList(vec![record(
            "karpenter",
            vec![entry("0.28.x", "1.21", "1.24"), entry("0.29.x", "1.23", "1.26")],
        )]);
        let table = list.matrix(&Options::default());
        assert_eq!(
            table.header,
            vec!["K8s Versions", "1.21 - 1.24", "1.23 - 1.26"]
        );
        assert_eq!(
            table.rows,
            vec![vec!["karpenter Versions", "0.28.x", "0.29.x"]]
        );
    }

    #[test]
    fn test_multi_record_cells_collapse_with_plus() {
        // Both of b's versions reach its newest app version at 1.23
        let list = KompatList(vec![
            record("a", vec![entry("1.0", "1.20", "1.23")]),
            record(
                "b",
                vec![entry("2.0", "1.21", "1.23"), entry("2.1", "1.22", "1.23")],
            ),
        ]);
        let table = list.matrix(&Options::default());
        assert_eq!(table.header, vec!["K8s Versions", "1.20", "1.21", "1.22", "1.23"]);
        assert_eq!(table.rows[1], vec!["b Versions", "", "2.0", "2.0+", "2.0+"]);
    }

    proptest! {
        #[test]
        fn prop_expansion_is_dense_and_ascending(
            major in 1u64..3,
            min_minor in 0u64..30,
            span in 0u64..10,
        ) {
            let max_minor = min_minor + span;
            let e = entry(
                "1.0",
                &format!("{major}.{min_minor}"),
                &format!("{major}.{max_minor}"),
            );
            let covered = e.k8s_versions();
            prop_assert_eq!(covered.len() as u64, span + 1);
            prop_assert_eq!(covered.first().unwrap(), &format!("{major}.{min_minor}"));
            prop_assert_eq!(covered.last().unwrap(), &format!("{major}.{max_minor}"));
            for pair in covered.windows(2) {
                prop_assert!(crate::version::compare_k8s(&pair[0], &pair[1]).is_lt());
            }
        }
    }
}
