//! Variant matching pipeline.
//!
//! This module provides the per-call processing stages:
//!
//! - [`QualityFilter`]: accepts or rejects a call on its FILTER status
//! - [`VariantDecomposer`]: splits a call into one allele per ALT entry
//! - [`MatchClassifier`]: looks alleles up in the index and labels each hit
//! - [`MatchRunSummary`]: counters and match records for a run
//! - [`MatchingEngine`]: wires the stages together
//!
//! ## Matching Algorithm
//!
//! For each call, in file order:
//!
//! 1. **Filter**: filtered calls are counted and dropped
//! 2. **Annotate**: the configured annotator labels each ALT allele
//! 3. **Decompose**: allele `i` gets key `(contig, pos, pos + len(alt_i) - 1)`
//! 4. **Classify**: every index record under that key is reported, EXACT when
//!    REF and ALT are identical, OVERLAPPING otherwise
//!
//! ## Example
//!
//! ```rust,no_run
//! use civic_matcher::{KnowledgeBaseIndex, MatchingEngine};
//! use civic_matcher::parsing::vcf::VariantCallReader;
//! use std::path::Path;
//!
//! let index = KnowledgeBaseIndex::load_from_file(Path::new("civic.tsv")).unwrap();
//! let reader = VariantCallReader::open(Path::new("sample.vcf")).unwrap();
//!
//! let engine = MatchingEngine::new(&index);
//! let summary = engine.try_run(reader.records()).unwrap();
//!
//! for m in &summary.matches {
//!     println!("{} {} {}", m.kind, m.allele.position, m.record.label());
//! }
//! ```
//!
//! [`QualityFilter`]: filter::QualityFilter
//! [`VariantDecomposer`]: decompose::VariantDecomposer
//! [`MatchClassifier`]: classifier::MatchClassifier
//! [`MatchRunSummary`]: summary::MatchRunSummary
//! [`MatchingEngine`]: engine::MatchingEngine

pub mod classifier;
pub mod decompose;
pub mod engine;
pub mod filter;
pub mod summary;
