use serde::{Deserialize, Serialize};

/// A closed genomic interval `[start, end]` on one contig, used as a lookup key.
///
/// Coordinates are 1-based and inclusive, matching VCF `POS` and the CIViC
/// `start`/`stop` columns. Equality and hashing cover all three fields, so two
/// keys are interchangeable exactly when contig, start and end all agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionKey {
    contig: String,
    start: u64,
    end: u64,
}

impl PositionKey {
    /// Build a key. Use [`PositionKey::try_new`] for coordinates that come
    /// from untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(contig: impl Into<String>, start: u64, end: u64) -> Self {
        assert!(start <= end, "inverted interval {start}-{end}");
        Self {
            contig: contig.into(),
            start,
            end,
        }
    }

    /// Build a key, returning `None` for an inverted interval.
    pub fn try_new(contig: impl Into<String>, start: u64, end: u64) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self {
            contig: contig.into(),
            start,
            end,
        })
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of bases covered by the interval
    #[must_use]
    pub fn span(&self) -> u64 {
        self.end - self.start + 1
    }
}

impl std::fmt::Display for PositionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.end)
    }
}
