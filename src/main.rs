use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use reftagger::{Document, Reftagger, Settings};

#[derive(Parser, Debug)]
#[command(name = "reftagger")]
#[command(about = "Tags Quran and Bible citations in prose and emits annotated HTML")]
#[command(version)]
struct Args {
    /// Input text file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Translation priority list, highest priority first
    #[arg(long, value_delimiter = ',')]
    versions: Vec<String>,

    /// Container tags to skip in addition to the built-in ones
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// UI locale for placeholder text
    #[arg(long, default_value = "en")]
    language: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    let text = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {}", path.display());
            }
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let mut settings = Settings {
        language: args.language,
        exclude: args.exclude,
        ..Default::default()
    };
    if !args.versions.is_empty() {
        settings.versions = args.versions;
    }

    info!(?settings, "Starting reftagger");

    let tagger = Reftagger::new(settings)?;
    let mut document = Document::from_text(&text);
    let stats = tagger.annotate(&mut document)?;

    print!("{}", document.to_html());

    info!(
        blocks_scanned = stats.blocks_scanned,
        citations_found = stats.citations_found,
        citations_annotated = stats.citations_annotated,
        "Annotation complete"
    );

    Ok(())
}
