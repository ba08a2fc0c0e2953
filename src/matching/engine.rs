use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::annotation::{AlleleClassAnnotator, NoopAnnotator, VariantAnnotator};
use crate::core::types::ZeroLengthAllelePolicy;
use crate::core::variant::VariantCall;
use crate::knowledgebase::index::KnowledgeBaseIndex;
use crate::matching::classifier::MatchClassifier;
use crate::matching::decompose::VariantDecomposer;
use crate::matching::filter::QualityFilter;
use crate::matching::summary::MatchRunSummary;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// How to treat ALT alleles with no bases
    pub zero_length_alleles: ZeroLengthAllelePolicy,
    /// Attach allele-class annotations to accepted calls
    pub annotate: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            zero_length_alleles: ZeroLengthAllelePolicy::Skip,
            annotate: true,
        }
    }
}

/// The main matching engine.
///
/// Holding an engine means the index is built; [`MatchingEngine::start`] opens
/// a streaming run and [`MatchRun::finish`] closes it.
pub struct MatchingEngine<'a> {
    index: &'a KnowledgeBaseIndex,
    filter: QualityFilter,
    decomposer: VariantDecomposer,
    classifier: MatchClassifier,
    annotator: Box<dyn VariantAnnotator + 'a>,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(index: &'a KnowledgeBaseIndex) -> Self {
        Self::with_config(index, &MatchingConfig::default())
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(index: &'a KnowledgeBaseIndex, config: &MatchingConfig) -> Self {
        let annotator: Box<dyn VariantAnnotator + 'a> = if config.annotate {
            Box::new(AlleleClassAnnotator)
        } else {
            Box::new(NoopAnnotator)
        };

        Self {
            index,
            filter: QualityFilter,
            decomposer: VariantDecomposer::new(config.zero_length_alleles),
            classifier: MatchClassifier,
            annotator,
        }
    }

    /// Replace the annotator chosen by the configuration
    #[must_use]
    pub fn with_annotator(mut self, annotator: impl VariantAnnotator + 'a) -> Self {
        self.annotator = Box::new(annotator);
        self
    }

    /// Begin streaming calls
    pub fn start(&self) -> MatchRun<'_, 'a> {
        MatchRun {
            engine: self,
            summary: MatchRunSummary::new(),
        }
    }

    /// Process every call in order and return the finished summary
    pub fn run(&self, calls: impl IntoIterator<Item = VariantCall>) -> MatchRunSummary {
        let mut run = self.start();
        for call in calls {
            run.push(call);
        }
        run.finish()
    }

    /// Like [`MatchingEngine::run`] for a fallible call source.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `calls`; the partial summary is discarded.
    pub fn try_run<E>(
        &self,
        calls: impl IntoIterator<Item = Result<VariantCall, E>>,
    ) -> Result<MatchRunSummary, E> {
        let mut run = self.start();
        for call in calls {
            run.push(call?);
        }
        Ok(run.finish())
    }
}

/// An open streaming run over one call source
pub struct MatchRun<'e, 'a> {
    engine: &'e MatchingEngine<'a>,
    summary: MatchRunSummary,
}

impl MatchRun<'_, '_> {
    /// Filter, annotate, decompose and classify one call
    pub fn push(&mut self, mut call: VariantCall) {
        let engine = self.engine;

        if !engine.filter.accept(&call, &mut self.summary) {
            return;
        }

        engine.annotator.annotate(&mut call);

        let alleles = engine.decomposer.decompose(&call);
        let skipped = call.alternate_alleles.len() - alleles.len();
        if skipped > 0 {
            warn!(
                contig = %call.contig,
                position = call.start,
                skipped,
                "Skipping alternate allele without bases"
            );
            self.summary.skipped_alleles += skipped;
        }

        for allele in &alleles {
            let matches = engine.classifier.classify(allele, engine.index);
            for m in &matches {
                debug!(
                    position = %allele.position,
                    alt = %allele.alternate_bases,
                    kind = %m.kind,
                    record = %m.record.label(),
                    "Knowledge-base hit"
                );
            }
            self.summary.matches.extend(matches);
        }
    }

    /// Summary accumulated so far
    pub fn summary(&self) -> &MatchRunSummary {
        &self.summary
    }

    /// Close the run once the call source is exhausted
    pub fn finish(self) -> MatchRunSummary {
        info!(
            "Got {} variants and filtered out {}",
            self.summary.accepted_count, self.summary.filtered_count
        );
        info!(
            exact = self.summary.exact_count(),
            overlapping = self.summary.overlapping_count(),
            "Matched against knowledge base"
        );
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::KnowledgeBaseRecord;
    use crate::core::types::MatchKind;

    fn kb() -> KnowledgeBaseIndex {
        KnowledgeBaseIndex::build(vec![KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T")])
    }

    fn call(start: u64, reference: &str, alts: &[&str]) -> VariantCall {
        VariantCall::new(
            "chr1",
            start,
            reference,
            alts.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    #[test]
    fn test_scenario_exact_match() {
        let index = kb();
        let summary = MatchingEngine::new(&index).run(vec![call(100, "A", &["T"])]);

        assert_eq!(summary.matches.len(), 1);
        assert_eq!(summary.matches[0].kind, MatchKind::Exact);
        assert_eq!(summary.accepted_count, 1);
        assert_eq!(summary.filtered_count, 0);
    }

    #[test]
    fn test_scenario_overlapping_match() {
        let index = kb();
        let summary = MatchingEngine::new(&index).run(vec![call(100, "A", &["G"])]);

        assert_eq!(summary.matches.len(), 1);
        assert_eq!(summary.matches[0].kind, MatchKind::Overlapping);
    }

    #[test]
    fn test_scenario_filtered_call() {
        let index = kb();
        let summary =
            MatchingEngine::new(&index).run(vec![call(100, "A", &["T"]).with_filtered(true)]);

        assert!(summary.matches.is_empty());
        assert_eq!(summary.filtered_count, 1);
        assert_eq!(summary.accepted_count, 0);
    }

    #[test]
    fn test_scenario_absent_position() {
        let index = kb();
        let summary = MatchingEngine::new(&index).run(vec![call(5000, "A", &["T"])]);

        assert!(summary.matches.is_empty());
        assert_eq!(summary.accepted_count, 1);
    }

    #[test]
    fn test_scenario_mixed_candidates() {
        let index = KnowledgeBaseIndex::build(vec![
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T"),
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "C"),
        ]);
        let summary = MatchingEngine::new(&index).run(vec![call(100, "A", &["T"])]);

        let kinds: Vec<MatchKind> = summary.matches.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MatchKind::Exact, MatchKind::Overlapping]);
    }

    #[test]
    fn test_filtered_call_is_never_annotated_or_classified() {
        struct Panicking;
        impl VariantAnnotator for Panicking {
            fn annotate(&self, _call: &mut VariantCall) {
                panic!("filtered call reached the annotator");
            }
        }

        let index = kb();
        let engine = MatchingEngine::new(&index).with_annotator(Panicking);
        let summary = engine.run(vec![call(100, "A", &["T"]).with_filtered(true)]);
        assert_eq!(summary.filtered_count, 1);
    }

    #[test]
    fn test_multi_allelic_call() {
        let index = KnowledgeBaseIndex::build(vec![
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T"),
            KnowledgeBaseRecord::new("chr1", 100, 102, "A", "AGG"),
        ]);
        let summary = MatchingEngine::new(&index).run(vec![call(100, "A", &["G", "AGG", "TTTT"])]);

        assert_eq!(summary.matches.len(), 2);
        assert_eq!(summary.matches[0].allele.alternate_bases, "G");
        assert_eq!(summary.matches[0].kind, MatchKind::Overlapping);
        assert_eq!(summary.matches[1].allele.alternate_bases, "AGG");
        assert_eq!(summary.matches[1].kind, MatchKind::Exact);
        assert_eq!(summary.matches[1].allele.annotation.as_deref(), Some("INS"));
    }

    #[test]
    fn test_zero_length_alleles_are_counted() {
        let index = kb();
        let summary = MatchingEngine::new(&index).run(vec![call(100, "A", &["", "T"])]);
        assert_eq!(summary.skipped_alleles, 1);
        assert_eq!(summary.exact_count(), 1);

        let config = MatchingConfig {
            zero_length_alleles: ZeroLengthAllelePolicy::SingleBase,
            annotate: false,
        };
        let summary = MatchingEngine::with_config(&index, &config).run(vec![call(100, "A", &[""])]);
        assert_eq!(summary.skipped_alleles, 0);
        assert_eq!(summary.overlapping_count(), 1);
        assert!(summary.matches[0].allele.annotation.is_none());
    }

    #[test]
    fn test_structural_variant_call_is_skipped() {
        let index = KnowledgeBaseIndex::build(vec![KnowledgeBaseRecord::new(
            "7", 100, 104, "A", "ACGTA",
        )]);
        let sv = crate::parsing::vcf::parse_record_line("7\t100\t.\tA\t<DEL>\t.\tPASS\tSVTYPE=DEL", 1)
            .unwrap();

        let summary = MatchingEngine::new(&index).run(vec![sv.clone()]);
        assert_eq!(summary.accepted_count, 1);
        assert_eq!(summary.skipped_alleles, 1);
        assert!(summary.matches.is_empty());

        let config = MatchingConfig {
            zero_length_alleles: ZeroLengthAllelePolicy::SingleBase,
            annotate: true,
        };
        let summary = MatchingEngine::with_config(&index, &config).run(vec![sv]);
        assert_eq!(summary.skipped_alleles, 0);
        assert!(summary.matches.is_empty());
    }

    #[test]
    fn test_run_is_idempotent() {
        let index = KnowledgeBaseIndex::build(vec![
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T"),
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "G"),
            KnowledgeBaseRecord::new("chr1", 200, 200, "C", "T"),
        ]);
        let calls = vec![
            call(100, "A", &["T", "G"]),
            call(150, "A", &["T"]).with_filtered(true),
            call(200, "C", &["A"]),
        ];

        let engine = MatchingEngine::new(&index);
        let first = engine.run(calls.clone());
        let second = engine.run(calls);
        assert_eq!(first, second);
        assert_eq!(first.matches.len(), 5);
    }

    #[test]
    fn test_try_run_stops_on_error() {
        let index = kb();
        let calls: Vec<Result<VariantCall, String>> = vec![
            Ok(call(100, "A", &["T"])),
            Err("truncated record".to_string()),
            Ok(call(100, "A", &["T"])),
        ];

        let result = MatchingEngine::new(&index).try_run(calls);
        assert_eq!(result.unwrap_err(), "truncated record");
    }

    #[test]
    fn test_partial_runs_merge_to_full_run() {
        let index = kb();
        let engine = MatchingEngine::new(&index);
        let calls = vec![
            call(100, "A", &["T"]),
            call(100, "A", &["G"]).with_filtered(true),
            call(100, "A", &["C"]),
        ];

        let full = engine.run(calls.clone());

        let mut merged = engine.run(calls[..1].to_vec());
        merged.merge(engine.run(calls[1..].to_vec()));
        assert_eq!(merged, full);
    }
}
