use serde::{Deserialize, Serialize};

use crate::core::position::PositionKey;

/// Curation metadata carried alongside a knowledge-base variant.
///
/// Matching never looks inside the payload; it is only reported back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivicPayload {
    /// CIViC variant identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    /// Gene symbol (e.g. BRAF)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,

    /// Variant name as curated (e.g. V600E)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Link to the CIViC variant page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_types: Option<String>,

    /// Genome build the coordinates refer to (e.g. GRCh37)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_build: Option<String>,
}

/// One curated clinical variant from the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseRecord {
    pub contig: String,
    pub start: u64,
    pub end: u64,
    pub reference_bases: String,
    pub alternate_bases: String,
    pub payload: CivicPayload,
}

impl KnowledgeBaseRecord {
    pub fn new(
        contig: impl Into<String>,
        start: u64,
        end: u64,
        reference_bases: impl Into<String>,
        alternate_bases: impl Into<String>,
    ) -> Self {
        Self {
            contig: contig.into(),
            start,
            end,
            reference_bases: reference_bases.into(),
            alternate_bases: alternate_bases.into(),
            payload: CivicPayload::default(),
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: CivicPayload) -> Self {
        self.payload = payload;
        self
    }

    /// The key this record is indexed under
    ///
    /// # Panics
    ///
    /// Panics if `end < start`; the CIViC loader never yields such a record.
    pub fn position(&self) -> PositionKey {
        PositionKey::new(self.contig.clone(), self.start, self.end)
    }

    /// Short human-readable label, e.g. `BRAF V600E`
    pub fn label(&self) -> String {
        match (&self.payload.gene, &self.payload.variant) {
            (Some(gene), Some(variant)) => format!("{gene} {variant}"),
            (Some(gene), None) => gene.clone(),
            (None, Some(variant)) => variant.clone(),
            (None, None) => format!(
                "{}:{} {}>{}",
                self.contig, self.start, self.reference_bases, self.alternate_bases
            ),
        }
    }
}
