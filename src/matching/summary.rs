use serde::{Deserialize, Serialize};

use crate::core::types::MatchKind;
use crate::matching::classifier::MatchRecord;

/// Counts and match records accumulated over one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRunSummary {
    /// Calls that passed the quality filter
    pub accepted_count: usize,

    /// Calls rejected by the quality filter
    pub filtered_count: usize,

    /// Alternate alleles dropped by the zero-length allele policy
    pub skipped_alleles: usize,

    /// Match records in call order, then allele order, then index order
    pub matches: Vec<MatchRecord>,
}

impl MatchRunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call seen, accepted or not
    pub fn total_calls(&self) -> usize {
        self.accepted_count + self.filtered_count
    }

    pub fn exact_count(&self) -> usize {
        self.count_kind(MatchKind::Exact)
    }

    pub fn overlapping_count(&self) -> usize {
        self.count_kind(MatchKind::Overlapping)
    }

    fn count_kind(&self, kind: MatchKind) -> usize {
        self.matches.iter().filter(|m| m.kind == kind).count()
    }

    /// Match records of one kind, in run order
    pub fn matches_of_kind(&self, kind: MatchKind) -> impl Iterator<Item = &MatchRecord> {
        self.matches.iter().filter(move |m| m.kind == kind)
    }

    /// Fold a partial summary from another worker into this one.
    ///
    /// Counters add up; `other`'s matches are appended after ours, so merging
    /// shards in stream order reproduces the single-worker summary.
    pub fn merge(&mut self, other: MatchRunSummary) {
        self.accepted_count += other.accepted_count;
        self.filtered_count += other.filtered_count;
        self.skipped_alleles += other.skipped_alleles;
        self.matches.extend(other.matches);
    }
}
