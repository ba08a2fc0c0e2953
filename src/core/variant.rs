use serde::{Deserialize, Serialize};

use crate::core::position::PositionKey;

/// One record from the sample VCF, reduced to the fields matching needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantCall {
    pub contig: String,

    /// 1-based position of the first reference base
    pub start: u64,

    pub reference_bases: String,

    /// True when FILTER holds anything other than `PASS` or `.`
    pub filtered: bool,

    pub alternate_alleles: Vec<String>,

    /// Per-allele annotations attached by a [`crate::annotation::VariantAnnotator`].
    /// Either empty or the same length as `alternate_alleles`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl VariantCall {
    pub fn new(
        contig: impl Into<String>,
        start: u64,
        reference_bases: impl Into<String>,
        alternate_alleles: Vec<String>,
    ) -> Self {
        Self {
            contig: contig.into(),
            start,
            reference_bases: reference_bases.into(),
            filtered: false,
            alternate_alleles,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        self
    }

    /// Annotation for the alternate allele at `index`, if one was attached
    pub fn annotation(&self, index: usize) -> Option<&str> {
        self.annotations.get(index).map(String::as_str)
    }
}

/// A single alternate allele split out of a [`VariantCall`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedAllele {
    pub position: PositionKey,
    pub reference_bases: String,
    pub alternate_bases: String,

    /// Index of this allele within the call's ALT column
    pub allele_index: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}
