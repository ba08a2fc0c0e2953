use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::info;

use crate::core::position::PositionKey;
use crate::core::record::KnowledgeBaseRecord;
use crate::parsing::civic::load_civic_file;

use super::KnowledgeBaseError;

/// Knowledge-base records grouped by their exact genomic position.
///
/// Built once, then read-only. Records sharing a key keep the order in which
/// they were supplied; nothing is deduplicated or merged across keys.
#[derive(Debug, Default, Clone)]
pub struct KnowledgeBaseIndex {
    /// Index: position -> records at exactly that position
    by_position: HashMap<PositionKey, Vec<KnowledgeBaseRecord>>,

    record_count: usize,
}

impl KnowledgeBaseIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every record under the key computed from its own coordinates
    pub fn build(records: impl IntoIterator<Item = KnowledgeBaseRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.add_record(record);
        }
        index
    }

    /// Load a CIViC variant summary file and index it
    ///
    /// # Errors
    ///
    /// Returns `KnowledgeBaseError::NotFound` if the file does not exist, or
    /// `KnowledgeBaseError::Parse` if it cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, KnowledgeBaseError> {
        if !path.exists() {
            return Err(KnowledgeBaseError::NotFound(path.to_path_buf()));
        }

        let records = load_civic_file(path)?;
        let index = Self::build(records);

        info!(
            positions = index.position_count(),
            "Got {} CIViC variants",
            index.len()
        );

        Ok(index)
    }

    fn add_record(&mut self, record: KnowledgeBaseRecord) {
        self.by_position
            .entry(record.position())
            .or_default()
            .push(record);
        self.record_count += 1;
    }

    /// Records stored under exactly `key`, in insertion order
    pub fn lookup(&self, key: &PositionKey) -> &[KnowledgeBaseRecord] {
        self.by_position.get(key).map_or(&[], Vec::as_slice)
    }

    /// Number of records in the index
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Number of distinct position keys
    pub fn position_count(&self) -> usize {
        self.by_position.len()
    }

    /// Distinct contig names, sorted
    pub fn contigs(&self) -> BTreeSet<&str> {
        self.by_position.keys().map(PositionKey::contig).collect()
    }

    /// Iterate over all positions and their records, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&PositionKey, &[KnowledgeBaseRecord])> {
        self.by_position.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
