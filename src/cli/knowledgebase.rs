use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::core::position::PositionKey;
use crate::knowledgebase::index::KnowledgeBaseIndex;

#[derive(Args)]
pub struct KnowledgeBaseArgs {
    #[command(subcommand)]
    pub command: KnowledgeBaseCommands,
}

#[derive(Subcommand)]
pub enum KnowledgeBaseCommands {
    /// Summarize the records that can be matched by position
    Stats {
        /// CIViC variant summary TSV (plain or gzip-compressed)
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Show the records stored at one exact position
    Show {
        /// CIViC variant summary TSV (plain or gzip-compressed)
        #[arg(required = true)]
        path: PathBuf,

        /// Contig name as written in the knowledge base (e.g. "7")
        #[arg(long, required = true)]
        contig: String,

        /// 1-based start position
        #[arg(long, required = true)]
        start: u64,

        /// 1-based inclusive end position (defaults to start)
        #[arg(long)]
        end: Option<u64>,
    },
}

/// Execute knowledge-base subcommand
///
/// # Errors
///
/// Returns an error if the knowledge base cannot be loaded or the requested
/// interval is inverted.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: KnowledgeBaseArgs, format: OutputFormat) -> anyhow::Result<()> {
    match args.command {
        KnowledgeBaseCommands::Stats { path } => run_stats(&path, format),
        KnowledgeBaseCommands::Show {
            path,
            contig,
            start,
            end,
        } => {
            let end = end.unwrap_or(start);
            let key = PositionKey::try_new(contig, start, end)
                .ok_or_else(|| anyhow::anyhow!("End {end} is before start {start}"))?;
            run_show(&path, &key, format)
        }
    }
}

fn load(path: &Path) -> anyhow::Result<KnowledgeBaseIndex> {
    KnowledgeBaseIndex::load_from_file(path)
        .with_context(|| format!("Could not load knowledge base from {}", path.display()))
}

fn run_stats(path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let index = load(path)?;
    let contigs: Vec<&str> = index.contigs().into_iter().collect();
    let shared_positions = index.iter().filter(|(_, records)| records.len() > 1).count();

    match format {
        OutputFormat::Text => {
            println!("Knowledge base: {}", path.display());
            println!("  Records: {}", index.len());
            println!("  Positions: {}", index.position_count());
            println!("  Positions with several records: {shared_positions}");
            println!("  Contigs ({}): {}", contigs.len(), contigs.join(", "));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "records": index.len(),
                "positions": index.position_count(),
                "shared_positions": shared_positions,
                "contigs": contigs,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("records\tpositions\tshared_positions\tcontigs");
            println!(
                "{}\t{}\t{shared_positions}\t{}",
                index.len(),
                index.position_count(),
                contigs.join(",")
            );
        }
    }

    Ok(())
}

fn run_show(path: &Path, key: &PositionKey, format: OutputFormat) -> anyhow::Result<()> {
    let index = load(path)?;
    let records = index.lookup(key);

    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                eprintln!("No knowledge-base records at {key}");
                return Ok(());
            }
            println!("{} record(s) at {key}", records.len());
            for record in records {
                println!(
                    "  {} {}>{}",
                    record.label(),
                    record.reference_bases,
                    record.alternate_bases
                );
                if let Some(summary) = &record.payload.summary {
                    println!("    {summary}");
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "position": key,
                "records": records,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("civic_variant_id\tgene\tvariant\tref\talt\treference_build");
            for record in records {
                let payload = &record.payload;
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    payload.variant_id.as_deref().unwrap_or("."),
                    payload.gene.as_deref().unwrap_or("."),
                    payload.variant.as_deref().unwrap_or("."),
                    record.reference_bases,
                    record.alternate_bases,
                    payload.reference_build.as_deref().unwrap_or("."),
                );
            }
        }
    }

    Ok(())
}
