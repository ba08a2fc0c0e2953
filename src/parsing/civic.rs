//! Parser for CIViC variant summary exports.
//!
//! CIViC publishes nightly `VariantSummaries.tsv` files with one variant per
//! row. Columns are located by header name, so older (`gene`) and newer
//! (`feature_name`) layouts both load. Only rows carrying a chromosome and
//! start/stop coordinates can be matched by position; the rest are skipped.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::record::{CivicPayload, KnowledgeBaseRecord};
use crate::parsing::{open_text_reader, ParseError};
use crate::utils::validation::{check_record_limit, normalize_bases};

const REQUIRED_COLUMNS: [&str; 5] = [
    "chromosome",
    "start",
    "stop",
    "reference_bases",
    "variant_bases",
];

/// Column positions resolved from the header row
struct Columns {
    by_name: HashMap<String, usize>,
}

impl Columns {
    fn from_header(line: &str) -> Result<Self, ParseError> {
        let by_name: HashMap<String, usize> = line
            .split('\t')
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| !by_name.contains_key(*c))
            .collect();
        if !missing.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "CIViC header is missing required columns: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { by_name })
    }

    /// Trimmed field for the first of `names` present in the header; empty if absent
    fn get<'a>(&self, fields: &[&'a str], names: &[&str]) -> &'a str {
        names
            .iter()
            .find_map(|name| self.by_name.get(*name))
            .and_then(|&i| fields.get(i))
            .map_or("", |s| s.trim())
    }

    fn optional(&self, fields: &[&str], names: &[&str]) -> Option<String> {
        let value = self.get(fields, names);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Load a CIViC variant summary file (plain or gzip-compressed)
///
/// # Errors
///
/// Returns `ParseError::FileNotFound` or `ParseError::Io` if the file cannot be
/// read, `ParseError::InvalidFormat` for a bad header or coordinate, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn load_civic_file(path: &Path) -> Result<Vec<KnowledgeBaseRecord>, ParseError> {
    let reader = open_text_reader(path)?;
    parse_civic_reader(reader)
}

/// Parse CIViC variant summary text
///
/// # Errors
///
/// See [`parse_civic_reader`].
pub fn parse_civic_text(text: &str) -> Result<Vec<KnowledgeBaseRecord>, ParseError> {
    parse_civic_reader(text.as_bytes())
}

/// Parse CIViC variant summaries from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header lacks a required column or
/// a start/stop value is not a number, `ParseError::Io` on read failure, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_civic_reader<R: BufRead>(reader: R) -> Result<Vec<KnowledgeBaseRecord>, ParseError> {
    let mut lines = reader.lines().enumerate();

    let cols = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break Columns::from_header(&line)?;
                }
            }
            None => {
                return Err(ParseError::InvalidFormat(
                    "No header found in CIViC file".to_string(),
                ))
            }
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, line) in lines {
        let line = line?;
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        let contig = cols.get(&fields, &["chromosome"]);
        let start = cols.get(&fields, &["start"]);
        let stop = cols.get(&fields, &["stop"]);
        if contig.is_empty() || start.is_empty() || stop.is_empty() {
            debug!(line = line_num, "CIViC row without coordinates, skipping");
            skipped += 1;
            continue;
        }

        let start = parse_coordinate(start, "start", line_num)?;
        let end = parse_coordinate(stop, "stop", line_num)?;
        if end < start {
            warn!(line = line_num, start, end, "CIViC row with stop before start, skipping");
            skipped += 1;
            continue;
        }

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let payload = CivicPayload {
            variant_id: cols.optional(&fields, &["variant_id"]),
            gene: cols.optional(&fields, &["gene", "feature_name"]),
            variant: cols.optional(&fields, &["variant"]),
            summary: cols.optional(&fields, &["summary"]),
            url: cols.optional(&fields, &["variant_civic_url"]),
            variant_types: cols.optional(&fields, &["variant_types"]),
            reference_build: cols.optional(&fields, &["reference_build"]),
        };

        records.push(
            KnowledgeBaseRecord::new(
                contig,
                start,
                end,
                normalize_bases(cols.get(&fields, &["reference_bases"])),
                normalize_bases(cols.get(&fields, &["variant_bases"])),
            )
            .with_payload(payload),
        );
    }

    if skipped > 0 {
        debug!(skipped, "Skipped CIViC rows that cannot be matched by position");
    }

    Ok(records)
}

fn parse_coordinate(value: &str, column: &str, line_num: usize) -> Result<u64, ParseError> {
    value.parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid {column} on line {line_num}: '{value}'"
        ))
    })
}
