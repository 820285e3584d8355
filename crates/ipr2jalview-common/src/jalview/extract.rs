//! Flattening of annotation records into feature lines

use std::collections::HashSet;

use crate::types::AnnotationRecord;

/// Set of InterPro accessions to keep. `None` at the call site keeps
/// everything; an empty set keeps nothing.
pub type IncludeFilter = HashSet<String>;

/// One feature row, before a colour has been assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLine {
    /// Entry name, shown as the feature description
    pub label: String,
    /// Sequence identifier the feature is attached to
    pub protein_label: String,
    pub start: u64,
    pub end: u64,
    /// Feature type, also the key of its colour
    pub type_tag: String,
}

/// Output of [`extract`] for a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFeatures {
    pub type_tag: String,
    pub lines: Vec<FeatureLine>,
}

/// Flatten `record` into one line per match fragment.
///
/// Lines follow the source order of proteins, locations and fragments.
/// A record excluded by `include` yields no lines but still reports its
/// type, so the caller registers the type either way.
/// `identifier_override` replaces every protein accession when set;
/// otherwise accessions are uppercased.
pub fn extract(
    record: &AnnotationRecord,
    include: Option<&IncludeFilter>,
    identifier_override: Option<&str>,
) -> RecordFeatures {
    let type_tag = record.entry_type().to_string();

    let included = include.is_none_or(|filter| filter.contains(record.accession()));
    if !included {
        return RecordFeatures {
            type_tag,
            lines: Vec::new(),
        };
    }

    let mut lines = Vec::new();
    for protein in &record.proteins {
        let protein_label = match identifier_override {
            Some(id) => id.to_string(),
            None => protein.accession.to_uppercase(),
        };

        for location in &protein.entry_protein_locations {
            for fragment in &location.fragments {
                lines.push(FeatureLine {
                    label: record.metadata.name.clone(),
                    protein_label: protein_label.clone(),
                    start: fragment.start,
                    end: fragment.end,
                    type_tag: type_tag.clone(),
                });
            }
        }
    }

    RecordFeatures { type_tag, lines }
}
