//! Conversion of InterPro annotations into a Jalview features file

use crate::api::{AnnotationSource, HttpClient, IdentifierResolver, InterProClient, UniProtClient};
use crate::config::Config;
use crate::error::Result;
use crate::progress;
use colored::Colorize;
use ipr2jalview_common::jalview::{build, group_records, IncludeFilter, Palette};
use std::path::PathBuf;
use tracing::info;

/// What to convert and where to write it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// UniProt accession to annotate
    pub accession: String,

    /// Output features file
    pub output: PathBuf,

    /// InterPro entries to keep; `None` keeps all of them
    pub include: Option<Vec<String>>,

    /// Label features with the UniProt entry name instead of the accession
    pub use_uniprot_id: bool,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub output: PathBuf,
    pub entries: usize,
    pub types: usize,
    pub features: usize,
    /// Entry name used as protein label, when resolved
    pub identifier: Option<String>,
}

/// Run the conversion against the live InterPro and UniProt APIs
pub async fn run(config: &Config, options: &ConvertOptions) -> Result<ConvertSummary> {
    let http = HttpClient::new(config)?;
    let interpro = InterProClient::new(http.clone(), config.interpro_url.clone());
    let uniprot = UniProtClient::new(http, config.uniprot_url.clone());

    let summary = convert(&interpro, &uniprot, options).await?;

    println!(
        "{} Wrote {} feature(s) across {} type(s) to {}",
        "✓".green(),
        summary.features,
        summary.types,
        summary.output.display().to_string().bold()
    );

    Ok(summary)
}

/// Fetch, extract, colour and write.
///
/// The identifier lookup only happens when `use_uniprot_id` is set.
/// Nothing is written unless every step succeeds.
pub async fn convert(
    source: &dyn AnnotationSource,
    resolver: &dyn IdentifierResolver,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let accession = options.accession.as_str();

    let spinner = progress::create_spinner(format!("Fetching InterPro annotations for {accession}..."));
    let records = source.fetch_annotations(accession).await;
    spinner.finish_and_clear();
    let records = records?;

    let identifier = if options.use_uniprot_id {
        let spinner = progress::create_spinner(format!("Resolving UniProt entry name for {accession}..."));
        let name = resolver.resolve_identifier(accession).await;
        spinner.finish_and_clear();
        Some(name?)
    } else {
        None
    };

    let filter: Option<IncludeFilter> = options
        .include
        .as_ref()
        .map(|entries| entries.iter().cloned().collect());

    let groups = group_records(&records, filter.as_ref(), identifier.as_deref());
    let file = build(&groups, Palette::default())?;
    file.write_atomic(&options.output)?;

    info!(
        accession,
        output = %options.output.display(),
        entries = records.len(),
        types = file.type_count(),
        features = file.feature_count(),
        "Conversion complete"
    );

    Ok(ConvertSummary {
        output: options.output.clone(),
        entries: records.len(),
        types: file.type_count(),
        features: file.feature_count(),
        identifier,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use async_trait::async_trait;
    use ipr2jalview_common::types::{
        AnnotationRecord, EntryMetadata, Fragment, Location, ProteinMatch,
    };
    use ipr2jalview_common::IprError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct FixedSource(Vec<AnnotationRecord>);

    #[async_trait]
    impl AnnotationSource for FixedSource {
        async fn fetch_annotations(&self, _accession: &str) -> Result<Vec<AnnotationRecord>> {
            Ok(self.0.clone())
        }
    }

    struct MissingSource;

    #[async_trait]
    impl AnnotationSource for MissingSource {
        async fn fetch_annotations(&self, accession: &str) -> Result<Vec<AnnotationRecord>> {
            Err(CliError::not_found("InterPro", accession))
        }
    }

    #[derive(Default)]
    struct CountingResolver {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl IdentifierResolver for CountingResolver {
        async fn resolve_identifier(&self, _accession: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("INS_HUMAN".to_string())
        }
    }

    fn record(accession: &str, name: &str, entry_type: &str, protein: &str, fragments: &[(u64, u64)]) -> AnnotationRecord {
        AnnotationRecord {
            metadata: EntryMetadata {
                accession: accession.to_string(),
                name: name.to_string(),
                entry_type: entry_type.to_string(),
                source_database: Some("interpro".to_string()),
            },
            proteins: vec![ProteinMatch {
                accession: protein.to_string(),
                entry_protein_locations: vec![Location {
                    fragments: fragments
                        .iter()
                        .map(|&(start, end)| Fragment { start, end })
                        .collect(),
                }],
            }],
        }
    }

    fn options(dir: &TempDir, include: Option<Vec<&str>>, use_uniprot_id: bool) -> ConvertOptions {
        ConvertOptions {
            accession: "P01308".to_string(),
            output: dir.path().join("features.txt"),
            include: include.map(|ids| ids.into_iter().map(String::from).collect()),
            use_uniprot_id,
        }
    }

    fn insulin_records() -> Vec<AnnotationRecord> {
        vec![
            record("IPR004825", "Insulin", "family", "p01308", &[(1, 110)]),
            record("IPR016179", "Insulin-like", "domain", "p01308", &[(27, 108)]),
            record("IPR022353", "Insulin, conserved site", "conserved_site", "p01308", &[(90, 104)]),
        ]
    }

    #[tokio::test]
    async fn test_convert_writes_file() {
        let dir = TempDir::new().unwrap();
        let resolver = CountingResolver::default();
        let opts = options(&dir, None, false);

        let summary = convert(&FixedSource(insulin_records()), &resolver, &opts)
            .await
            .unwrap();

        assert_eq!(summary.entries, 3);
        assert_eq!(summary.types, 3);
        assert_eq!(summary.features, 3);
        assert_eq!(summary.identifier, None);
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);

        let text = std::fs::read_to_string(&opts.output).unwrap();
        assert_eq!(
            text,
            "family\t4E7705\n\
             domain\t9D654C\n\
             conserved_site\t098BD9\n\
             startgroup\tinterpro\n\
             Insulin\tP01308\t-1\t1\t110\tfamily\t4E7705\n\
             Insulin-like\tP01308\t-1\t27\t108\tdomain\t9D654C\n\
             Insulin, conserved site\tP01308\t-1\t90\t104\tconserved_site\t098BD9\n\
             endgroup\tinterpro\n"
        );
    }

    #[tokio::test]
    async fn test_convert_with_uniprot_id() {
        let dir = TempDir::new().unwrap();
        let resolver = CountingResolver::default();
        let opts = options(&dir, None, true);

        let summary = convert(&FixedSource(insulin_records()), &resolver, &opts)
            .await
            .unwrap();

        assert_eq!(summary.identifier.as_deref(), Some("INS_HUMAN"));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);

        let text = std::fs::read_to_string(&opts.output).unwrap();
        let data: Vec<&str> = text.lines().filter(|l| l.split('\t').count() == 7).collect();
        assert_eq!(data.len(), 3);
        assert!(data.iter().all(|l| l.split('\t').nth(1) == Some("INS_HUMAN")));
    }

    #[tokio::test]
    async fn test_convert_with_filter() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, Some(vec!["IPR016179"]), false);

        let summary = convert(&FixedSource(insulin_records()), &CountingResolver::default(), &opts)
            .await
            .unwrap();

        // filtered-out types still get a header and colour
        assert_eq!(summary.types, 3);
        assert_eq!(summary.features, 1);

        let text = std::fs::read_to_string(&opts.output).unwrap();
        assert!(text.contains("Insulin-like\tP01308\t-1\t27\t108\tdomain\t9D654C\n"));
        assert!(!text.contains("\tfamily\t4E7705\n"));
    }

    #[tokio::test]
    async fn test_too_many_types_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let records: Vec<_> = (0..22)
            .map(|i| record(&format!("IPR{i:06}"), "X", &format!("type{i}"), "p1", &[(1, 2)]))
            .collect();
        let opts = options(&dir, None, false);

        let err = convert(&FixedSource(records), &CountingResolver::default(), &opts)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Pipeline(IprError::PaletteExhausted { required: 22, available: 21 })
        ));
        assert!(!opts.output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_not_found_skips_resolution() {
        let dir = TempDir::new().unwrap();
        let resolver = CountingResolver::default();
        let opts = options(&dir, None, true);

        let err = convert(&MissingSource, &resolver, &opts).await.unwrap_err();

        assert!(matches!(err, CliError::NotFound { service: "InterPro", .. }));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
        assert!(!opts.output.exists());
    }
}
