use serde::{Deserialize, Serialize};

/// How a sample allele relates to a knowledge-base record at the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Same position, reference bases and alternate bases
    Exact,
    /// Same position, different alleles
    Overlapping,
}

impl MatchKind {
    /// Classify two allele pairs that are already known to share a position.
    ///
    /// The result does not depend on argument order.
    #[must_use]
    pub fn between(
        reference_a: &str,
        alternate_a: &str,
        reference_b: &str,
        alternate_b: &str,
    ) -> Self {
        if reference_a == reference_b && alternate_a == alternate_b {
            Self::Exact
        } else {
            Self::Overlapping
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "EXACT"),
            Self::Overlapping => write!(f, "OVERLAPPING"),
        }
    }
}

/// What to do with an alternate allele that has no bases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroLengthAllelePolicy {
    /// Drop the allele and count it as skipped
    #[default]
    Skip,
    /// Treat the allele as covering one base (`end == start`)
    SingleBase,
}
