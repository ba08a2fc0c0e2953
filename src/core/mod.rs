//! Core data types for variant matching.
//!
//! - [`PositionKey`]: contig + closed interval, the lookup key of the index
//! - [`KnowledgeBaseRecord`]: a curated CIViC variant with its [`CivicPayload`]
//! - [`VariantCall`]: one sample VCF record
//! - [`DecomposedAllele`]: one alternate allele of a call, with its own key
//! - [`MatchKind`], [`ZeroLengthAllelePolicy`]: classification and policy enums
//!
//! ## Coordinates
//!
//! All coordinates are 1-based and inclusive. An allele starting at `start`
//! with alternate bases `alt` covers `[start, start + len(alt) - 1]`, which is
//! how the CIViC `start`/`stop` columns are laid out for simple variants.
//!
//! [`PositionKey`]: position::PositionKey
//! [`KnowledgeBaseRecord`]: record::KnowledgeBaseRecord
//! [`CivicPayload`]: record::CivicPayload
//! [`VariantCall`]: variant::VariantCall
//! [`DecomposedAllele`]: variant::DecomposedAllele
//! [`MatchKind`]: types::MatchKind
//! [`ZeroLengthAllelePolicy`]: types::ZeroLengthAllelePolicy

pub mod position;
pub mod record;
pub mod types;
pub mod variant;
