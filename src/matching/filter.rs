use crate::core::variant::VariantCall;
use crate::matching::summary::MatchRunSummary;

/// Accepts or rejects calls on their FILTER status
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityFilter;

impl QualityFilter {
    /// Returns `false` iff the call is filtered, counting it in `summary` either way.
    ///
    /// Each call must be passed exactly once; the counters assume it.
    pub fn accept(&self, call: &VariantCall, summary: &mut MatchRunSummary) -> bool {
        if call.filtered {
            summary.filtered_count += 1;
            false
        } else {
            summary.accepted_count += 1;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_counts_once_per_call() {
        let filter = QualityFilter;
        let mut summary = MatchRunSummary::new();

        let pass = VariantCall::new("chr1", 100, "A", vec!["T".to_string()]);
        let fail = pass.clone().with_filtered(true);

        assert!(filter.accept(&pass, &mut summary));
        assert!(!filter.accept(&fail, &mut summary));
        assert!(!filter.accept(&fail, &mut summary));

        assert_eq!(summary.accepted_count, 1);
        assert_eq!(summary.filtered_count, 2);
        assert!(summary.matches.is_empty());
    }
}
