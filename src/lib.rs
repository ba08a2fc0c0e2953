//! # civic-matcher
//!
//! A library for cross-referencing sample variant calls against the CIViC
//! clinical knowledge base.
//!
//! Knowledge-base variants are indexed by exact genomic position. Each
//! unfiltered call from a VCF is split into its alternate alleles, and every
//! allele is compared with the records stored at the same coordinates:
//!
//! - **EXACT**: same position, reference bases and alternate bases
//! - **OVERLAPPING**: same position, different alleles
//!
//! ## Example
//!
//! ```rust
//! use civic_matcher::{run, KnowledgeBaseRecord, MatchKind, VariantCall};
//!
//! let knowledge_base = vec![KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T")];
//! let calls = vec![VariantCall::new("chr1", 100, "A", vec!["T".to_string()])];
//!
//! let summary = run(knowledge_base, calls);
//! assert_eq!(summary.accepted_count, 1);
//! assert_eq!(summary.matches[0].kind, MatchKind::Exact);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Positions, records, calls and alleles
//! - [`knowledgebase`]: Position index over knowledge-base records
//! - [`matching`]: Filter, decomposer, classifier and engine
//! - [`parsing`]: CIViC and VCF readers
//! - [`annotation`]: Per-allele annotation hook
//! - [`cli`]: Command-line interface implementation

pub mod annotation;
pub mod cli;
pub mod core;
pub mod knowledgebase;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::position::PositionKey;
pub use core::record::{CivicPayload, KnowledgeBaseRecord};
pub use core::types::*;
pub use core::variant::{DecomposedAllele, VariantCall};
pub use knowledgebase::index::KnowledgeBaseIndex;
pub use matching::classifier::MatchRecord;
pub use matching::engine::{MatchingConfig, MatchingEngine};
pub use matching::summary::MatchRunSummary;

/// Index `knowledge_base_records` and match every call against it with the
/// default configuration.
#[allow(clippy::let_and_return)]
pub fn run(
    knowledge_base_records: impl IntoIterator<Item = KnowledgeBaseRecord>,
    variant_calls: impl IntoIterator<Item = VariantCall>,
) -> MatchRunSummary {
    let index = KnowledgeBaseIndex::build(knowledge_base_records);
    // The engine borrows `index` and must be dropped before it
    let summary = MatchingEngine::new(&index).run(variant_calls);
    summary
}
