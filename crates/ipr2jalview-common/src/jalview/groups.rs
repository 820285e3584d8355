//! Grouping of feature lines by feature type

use indexmap::IndexMap;

use super::extract::{extract, FeatureLine, IncludeFilter};
use crate::types::AnnotationRecord;

/// Feature lines keyed by feature type.
///
/// Keys keep first-seen order, which fixes both the colour each type
/// receives and the order of the output. Each value holds one vector
/// per contributing record, empty ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureGroups {
    groups: IndexMap<String, Vec<Vec<FeatureLine>>>,
}

impl FeatureGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `type_tag` if unseen, then append `lines` to it
    pub fn push(&mut self, type_tag: impl Into<String>, lines: Vec<FeatureLine>) {
        self.groups.entry(type_tag.into()).or_default().push(lines);
    }

    /// Number of distinct feature types
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Feature types in first-seen order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Every line, type order outer and record order inner
    pub fn lines(&self) -> impl Iterator<Item = &FeatureLine> {
        self.groups.values().flatten().flatten()
    }

    /// Total number of feature lines across all types
    pub fn feature_count(&self) -> usize {
        self.lines().count()
    }
}

/// Extract every record and group the results by type
pub fn group_records(
    records: &[AnnotationRecord],
    include: Option<&IncludeFilter>,
    identifier_override: Option<&str>,
) -> FeatureGroups {
    let mut groups = FeatureGroups::new();
    for record in records {
        let features = extract(record, include, identifier_override);
        groups.push(features.type_tag, features.lines);
    }

    tracing::debug!(
        records = records.len(),
        types = groups.len(),
        features = groups.feature_count(),
        "Grouped features by type"
    );

    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{EntryMetadata, Fragment, Location, ProteinMatch};

    fn line(label: &str, type_tag: &str, start: u64) -> FeatureLine {
        FeatureLine {
            label: label.to_string(),
            protein_label: "P1".to_string(),
            start,
            end: start + 1,
            type_tag: type_tag.to_string(),
        }
    }

    fn record(accession: &str, entry_type: &str, fragments: &[(u64, u64)]) -> AnnotationRecord {
        AnnotationRecord {
            metadata: EntryMetadata {
                accession: accession.to_string(),
                name: accession.to_string(),
                entry_type: entry_type.to_string(),
                source_database: None,
            },
            proteins: vec![ProteinMatch {
                accession: "p1".to_string(),
                entry_protein_locations: vec![Location {
                    fragments: fragments
                        .iter()
                        .map(|&(start, end)| Fragment { start, end })
                        .collect(),
                }],
            }],
        }
    }

    #[test]
    fn test_push_preserves_first_seen_order() {
        let mut groups = FeatureGroups::new();
        groups.push("family", vec![line("a", "family", 1)]);
        groups.push("domain", vec![line("b", "domain", 2)]);
        groups.push("family", vec![line("c", "family", 3)]);

        assert_eq!(groups.types().collect::<Vec<_>>(), vec!["family", "domain"]);
        let labels: Vec<_> = groups.lines().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_empty_contribution_registers_type() {
        let mut groups = FeatureGroups::new();
        groups.push("repeat", Vec::new());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.feature_count(), 0);
    }

    #[test]
    fn test_group_records_with_filter() {
        let records = vec![
            record("IPR1", "domain", &[(1, 10)]),
            record("IPR2", "family", &[(20, 30), (40, 50)]),
            record("IPR3", "domain", &[(60, 70)]),
        ];
        let filter: IncludeFilter = ["IPR2".to_string()].into_iter().collect();

        let groups = group_records(&records, Some(&filter), None);

        // excluded records still register their type
        assert_eq!(groups.types().collect::<Vec<_>>(), vec!["domain", "family"]);
        assert_eq!(groups.feature_count(), 2);
        assert!(groups.lines().all(|l| l.label == "IPR2"));
    }

    #[test]
    fn test_group_records_without_filter() {
        let records = vec![
            record("IPR1", "domain", &[(1, 10)]),
            record("IPR2", "family", &[(20, 30)]),
            record("IPR3", "domain", &[(60, 70)]),
        ];

        let groups = group_records(&records, None, None);

        let starts: Vec<_> = groups.lines().map(|l| l.start).collect();
        assert_eq!(starts, vec![1, 60, 20]);
    }
}
