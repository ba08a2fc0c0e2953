//! Command-line interface for civic-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **annotate**: Match a sample VCF against the CIViC knowledge base
//! - **knowledge-base**: Inspect a CIViC variant summary file
//!
//! ## Usage
//!
//! ```text
//! # Match a VCF against CIViC
//! civic-matcher annotate sample.vcf.gz --knowledge-base nightly-VariantSummaries.tsv
//!
//! # JSON output for scripting, exact hits only
//! civic-matcher --format json annotate sample.vcf -k civic.tsv.gz --exact-only
//!
//! # What does the knowledge base hold at one position?
//! civic-matcher knowledge-base show civic.tsv --contig 7 --start 140453136 --end 140453136
//! ```

use clap::{Parser, Subcommand};

pub mod annotate;
pub mod knowledgebase;

#[derive(Parser)]
#[command(name = "civic-matcher")]
#[command(version)]
#[command(about = "Match VCF variant calls against the CIViC clinical knowledge base")]
#[command(
    long_about = "civic-matcher cross-references the variants called in a sample VCF against CIViC.\n\nEach unfiltered call is split into its alternate alleles and compared with the curated variants at identical coordinates:\n- EXACT when reference and alternate bases agree\n- OVERLAPPING when only the position agrees"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a sample VCF against the knowledge base
    Annotate(annotate::AnnotateArgs),

    /// Inspect a knowledge-base file
    KnowledgeBase(knowledgebase::KnowledgeBaseArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
