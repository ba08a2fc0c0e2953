//! Variant effect annotation hook.
//!
//! An annotator runs once per accepted call, before decomposition, and may
//! attach one annotation string per alternate allele. Matching never reads
//! these annotations; they are carried through to the reported alleles.

use serde::{Deserialize, Serialize};

use crate::core::variant::VariantCall;
use crate::utils::validation::is_nucleotide_string;

/// Attaches functional metadata to a call
pub trait VariantAnnotator {
    /// Annotate `call` in place. Implementations either leave
    /// `call.annotations` empty or fill it with one entry per alternate allele.
    fn annotate(&self, call: &mut VariantCall);
}

/// Annotator that leaves calls untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnotator;

impl VariantAnnotator for NoopAnnotator {
    fn annotate(&self, _call: &mut VariantCall) {}
}

/// Coarse allele class derived from the REF/ALT shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlleleClass {
    /// Single nucleotide variant
    Snv,
    /// Multi-nucleotide variant (equal lengths, more than one base)
    Mnv,
    /// Insertion (ALT longer than REF)
    Ins,
    /// Deletion (ALT shorter than REF)
    Del,
    /// Symbolic, breakend or spanning-deletion allele
    Symbolic,
}

impl AlleleClass {
    #[must_use]
    pub fn classify(reference: &str, alternate: &str) -> Self {
        if !is_nucleotide_string(reference) || !is_nucleotide_string(alternate) {
            return Self::Symbolic;
        }

        match (reference.len(), alternate.len()) {
            (1, 1) => Self::Snv,
            (r, a) if r == a => Self::Mnv,
            (r, a) if r < a => Self::Ins,
            _ => Self::Del,
        }
    }
}

impl std::fmt::Display for AlleleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snv => write!(f, "SNV"),
            Self::Mnv => write!(f, "MNV"),
            Self::Ins => write!(f, "INS"),
            Self::Del => write!(f, "DEL"),
            Self::Symbolic => write!(f, "SYMBOLIC"),
        }
    }
}

/// Labels each alternate allele with its [`AlleleClass`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AlleleClassAnnotator;

impl VariantAnnotator for AlleleClassAnnotator {
    fn annotate(&self, call: &mut VariantCall) {
        call.annotations = call
            .alternate_alleles
            .iter()
            .map(|alt| AlleleClass::classify(&call.reference_bases, alt).to_string())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(AlleleClass::classify("A", "T"), AlleleClass::Snv);
        assert_eq!(AlleleClass::classify("AC", "GT"), AlleleClass::Mnv);
        assert_eq!(AlleleClass::classify("A", "ACGT"), AlleleClass::Ins);
        assert_eq!(AlleleClass::classify("ACGT", "A"), AlleleClass::Del);
        assert_eq!(AlleleClass::classify("A", "<DEL>"), AlleleClass::Symbolic);
        assert_eq!(AlleleClass::classify("A", "*"), AlleleClass::Symbolic);
        assert_eq!(AlleleClass::classify("A", ""), AlleleClass::Symbolic);
    }

    #[test]
    fn test_allele_class_annotator() {
        let mut call = VariantCall::new(
            "chr1",
            10,
            "A",
            vec!["T".to_string(), "AGG".to_string(), "<INS>".to_string()],
        );
        AlleleClassAnnotator.annotate(&mut call);
        assert_eq!(call.annotations, vec!["SNV", "INS", "SYMBOLIC"]);
        assert_eq!(call.annotation(1), Some("INS"));
    }

    #[test]
    fn test_noop_annotator() {
        let mut call = VariantCall::new("chr1", 10, "A", vec!["T".to_string()]);
        NoopAnnotator.annotate(&mut call);
        assert!(call.annotations.is_empty());
        assert_eq!(call.annotation(0), None);
    }
}
