//! Build automation tasks for ipr2jalview
//!
//! Currently generates the CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for ipr2jalview", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<ipr2jalview_cli::Cli>();

    let content = format!(
        r#"# ipr2jalview CLI Reference

This documentation is generated from the CLI source code. Last updated: {}.

## Overview

ipr2jalview fetches the InterPro entries matching a UniProt accession and
writes them as a Jalview sequence features file, one colour per entry type.

## Quick Start

```bash
# All InterPro entries for human insulin
ipr2jalview -a P01308 -o insulin.features

# Only two entries, labelled with the UniProt entry name (INS_HUMAN)
ipr2jalview -a P01308 -o insulin.features -i IPR004825 IPR016179 -u
```

Load the result in Jalview with *File > Load Features / Annotations* on an
alignment containing the sequence.

## Options

{}

## Environment Variables

- `IPR2JALVIEW_INTERPRO_URL` - InterPro API base URL (default: `https://www.ebi.ac.uk/interpro/api`)
- `IPR2JALVIEW_UNIPROT_URL` - UniProtKB API base URL (default: `https://rest.uniprot.org/uniprotkb`)
- `IPR2JALVIEW_TIMEOUT_SECS` - Per-request timeout (default: `60`)
- `IPR2JALVIEW_MAX_RETRIES` - Retries after HTTP 500, 502 or 503 (default: `5`)
- `IPR2JALVIEW_RETRY_BACKOFF_MS` - Base retry delay, doubled per attempt (default: `1000`)
- `IPR2JALVIEW_LOG_LEVEL` - Logging level (`trace`, `debug`, `info`, `warn`, `error`)
- `IPR2JALVIEW_LOG_OUTPUT` - `console`, `file` or `both`
- `IPR2JALVIEW_LOG_FORMAT` - `text` or `json`
- `IPR2JALVIEW_LOG_DIR` - Directory for log files

## Exit Codes

- `0` - Features file written
- `1` - Accession not found, palette exhausted, network or write failure
- `2` - Invalid command line

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
