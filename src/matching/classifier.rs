use serde::{Deserialize, Serialize};

use crate::core::record::KnowledgeBaseRecord;
use crate::core::types::MatchKind;
use crate::core::variant::DecomposedAllele;
use crate::knowledgebase::index::KnowledgeBaseIndex;

/// A sample allele paired with a knowledge-base record at the same position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub allele: DecomposedAllele,
    pub record: KnowledgeBaseRecord,
    pub kind: MatchKind,
}

/// Compares decomposed alleles against the position index
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchClassifier;

impl MatchClassifier {
    /// Every record stored at the allele's exact position, classified.
    ///
    /// Records come back in index insertion order, so EXACT and OVERLAPPING
    /// hits may interleave. Duplicate EXACT hits are all reported. An empty
    /// result means the position is not in the knowledge base.
    pub fn classify(&self, allele: &DecomposedAllele, index: &KnowledgeBaseIndex) -> Vec<MatchRecord> {
        index
            .lookup(&allele.position)
            .iter()
            .map(|candidate| MatchRecord {
                allele: allele.clone(),
                record: candidate.clone(),
                kind: MatchKind::between(
                    &allele.reference_bases,
                    &allele.alternate_bases,
                    &candidate.reference_bases,
                    &candidate.alternate_bases,
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::PositionKey;

    fn allele(contig: &str, start: u64, reference: &str, alt: &str) -> DecomposedAllele {
        DecomposedAllele {
            position: PositionKey::new(contig, start, start + alt.len() as u64 - 1),
            reference_bases: reference.to_string(),
            alternate_bases: alt.to_string(),
            allele_index: 0,
            annotation: None,
        }
    }

    #[test]
    fn test_exact_match() {
        let index = KnowledgeBaseIndex::build(vec![KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T")]);
        let matches = MatchClassifier.classify(&allele("chr1", 100, "A", "T"), &index);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, MatchKind::Exact);
    }

    #[test]
    fn test_overlapping_match() {
        let index = KnowledgeBaseIndex::build(vec![KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T")]);
        let matches = MatchClassifier.classify(&allele("chr1", 100, "A", "G"), &index);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, MatchKind::Overlapping);
    }

    #[test]
    fn test_reference_mismatch_is_overlapping() {
        let index = KnowledgeBaseIndex::build(vec![KnowledgeBaseRecord::new("chr1", 100, 100, "C", "T")]);
        let matches = MatchClassifier.classify(&allele("chr1", 100, "A", "T"), &index);
        assert_eq!(matches[0].kind, MatchKind::Overlapping);
    }

    #[test]
    fn test_no_candidates() {
        let index = KnowledgeBaseIndex::build(vec![KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T")]);
        assert!(MatchClassifier.classify(&allele("chr1", 101, "A", "T"), &index).is_empty());
        assert!(MatchClassifier.classify(&allele("chr2", 100, "A", "T"), &index).is_empty());
        // Same start, different end
        assert!(MatchClassifier.classify(&allele("chr1", 100, "A", "TT"), &index).is_empty());
    }

    #[test]
    fn test_mixed_candidates_keep_insertion_order() {
        let index = KnowledgeBaseIndex::build(vec![
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "G"),
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T"),
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "C"),
            KnowledgeBaseRecord::new("chr1", 100, 100, "A", "T"),
        ]);
        let matches = MatchClassifier.classify(&allele("chr1", 100, "A", "T"), &index);

        let kinds: Vec<MatchKind> = matches.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MatchKind::Overlapping,
                MatchKind::Exact,
                MatchKind::Overlapping,
                MatchKind::Exact
            ]
        );
        let alts: Vec<&str> = matches.iter().map(|m| m.record.alternate_bases.as_str()).collect();
        assert_eq!(alts, vec!["G", "T", "C", "T"]);
    }
}
