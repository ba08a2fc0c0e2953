//! Position index over the curated knowledge base.
//!
//! The knowledge base is a list of clinically annotated variants (CIViC). It is
//! loaded once per run and indexed by exact `(contig, start, end)`, so a sample
//! allele is compared only against records sitting at identical coordinates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use civic_matcher::KnowledgeBaseIndex;
//! use civic_matcher::core::position::PositionKey;
//! use std::path::Path;
//!
//! let index = KnowledgeBaseIndex::load_from_file(Path::new("nightly-VariantSummaries.tsv")).unwrap();
//!
//! for record in index.lookup(&PositionKey::new("7", 140453136, 140453136)) {
//!     println!("{}", record.label());
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::ParseError;

pub mod index;

#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("Could not find knowledge base at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load knowledge base: {0}")]
    Parse(#[from] ParseError),
}
