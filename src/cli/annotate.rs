use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::{MatchKind, ZeroLengthAllelePolicy};
use crate::knowledgebase::index::KnowledgeBaseIndex;
use crate::matching::classifier::MatchRecord;
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::matching::summary::MatchRunSummary;
use crate::parsing::vcf::VariantCallReader;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Sample VCF file (plain, .gz or .bgz)
    #[arg(required = true)]
    pub vcf: PathBuf,

    /// CIViC variant summary TSV (plain or gzip-compressed)
    #[arg(short = 'k', long, env = "CIVIC_KB")]
    pub knowledge_base: PathBuf,

    /// Only report EXACT matches
    #[arg(long)]
    pub exact_only: bool,

    /// How to handle ALT alleles with no bases
    #[arg(long, value_enum, default_value = "skip")]
    pub zero_length_alleles: ZeroLengthAllelePolicy,

    /// Do not attach allele-class annotations
    #[arg(long)]
    pub no_annotate: bool,
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if either input is missing or cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Open the VCF first so a bad path fails before the knowledge base is loaded
    let reader = VariantCallReader::open(&args.vcf)
        .with_context(|| format!("Could not read VCF file at {}", args.vcf.display()))?;
    let sample_names = reader.sample_names().to_vec();

    let index = KnowledgeBaseIndex::load_from_file(&args.knowledge_base).with_context(|| {
        format!(
            "Could not load knowledge base from {}",
            args.knowledge_base.display()
        )
    })?;

    if verbose {
        eprintln!(
            "Loaded {} CIViC variants at {} positions",
            index.len(),
            index.position_count()
        );
        eprintln!("Annotating {} for samples: {}", args.vcf.display(), sample_names.join(", "));
    }

    if index.is_empty() {
        eprintln!("Warning: Knowledge base is empty, no variants to match against.");
    }

    let config = MatchingConfig {
        zero_length_alleles: args.zero_length_alleles,
        annotate: !args.no_annotate,
    };
    let engine = MatchingEngine::with_config(&index, &config);
    let summary = engine
        .try_run(reader.records())
        .with_context(|| format!("Failed while reading {}", args.vcf.display()))?;

    let shown: Vec<&MatchRecord> = summary
        .matches
        .iter()
        .filter(|m| !args.exact_only || m.kind == MatchKind::Exact)
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&summary, &shown, &sample_names),
        OutputFormat::Json => print_json_results(&args, &summary, &shown, &sample_names)?,
        OutputFormat::Tsv => print_tsv_results(&shown),
    }

    Ok(())
}

fn print_text_results(summary: &MatchRunSummary, shown: &[&MatchRecord], sample_names: &[String]) {
    if !sample_names.is_empty() {
        println!("Samples: {}", sample_names.join(", "));
    }

    for m in shown {
        let tag = match m.kind {
            MatchKind::Exact => "EXACT MATCH",
            MatchKind::Overlapping => "OVERLAPPING",
        };
        let class = m
            .allele
            .annotation
            .as_deref()
            .map(|a| format!(" [{a}]"))
            .unwrap_or_default();

        println!(
            "[{tag}] {} {}>{}{class}",
            m.allele.position, m.allele.reference_bases, m.allele.alternate_bases
        );
        println!(
            "\t{} ({}>{}){}",
            m.record.label(),
            display_bases(&m.record.reference_bases),
            display_bases(&m.record.alternate_bases),
            m.record
                .payload
                .url
                .as_deref()
                .map(|u| format!(" {u}"))
                .unwrap_or_default()
        );
    }

    println!(
        "\nGot {} variants and filtered out {}.",
        summary.accepted_count, summary.filtered_count
    );
    println!(
        "Exact matches: {}, overlapping: {}",
        summary.exact_count(),
        summary.overlapping_count()
    );
    if summary.skipped_alleles > 0 {
        println!("Skipped zero-length alleles: {}", summary.skipped_alleles);
    }
}

/// CIViC leaves bases blank for many records
fn display_bases(bases: &str) -> &str {
    if bases.is_empty() {
        "-"
    } else {
        bases
    }
}

fn print_json_results(
    args: &AnnotateArgs,
    summary: &MatchRunSummary,
    shown: &[&MatchRecord],
    sample_names: &[String],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "vcf": args.vcf.display().to_string(),
        "knowledge_base": args.knowledge_base.display().to_string(),
        "samples": sample_names,
        "summary": {
            "accepted": summary.accepted_count,
            "filtered": summary.filtered_count,
            "skipped_alleles": summary.skipped_alleles,
            "exact": summary.exact_count(),
            "overlapping": summary.overlapping_count(),
        },
        "matches": shown,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(shown: &[&MatchRecord]) {
    println!(
        "kind\tcontig\tstart\tend\tref\talt\tallele_index\tannotation\tcivic_variant_id\tgene\tvariant\tcivic_ref\tcivic_alt\turl"
    );
    for m in shown {
        let payload = &m.record.payload;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            m.kind,
            m.allele.position.contig(),
            m.allele.position.start(),
            m.allele.position.end(),
            m.allele.reference_bases,
            m.allele.alternate_bases,
            m.allele.allele_index,
            m.allele.annotation.as_deref().unwrap_or("."),
            payload.variant_id.as_deref().unwrap_or("."),
            payload.gene.as_deref().unwrap_or("."),
            payload.variant.as_deref().unwrap_or("."),
            display_bases(&m.record.reference_bases),
            display_bases(&m.record.alternate_bases),
            payload.url.as_deref().unwrap_or("."),
        );
    }
}
