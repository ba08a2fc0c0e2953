//! Streaming reader for sample VCF files.
//!
//! The header (every `##` line plus the `#CHROM` line) is handed to noodles,
//! which validates it and provides the sample names. Data lines are then
//! decoded one at a time, keeping only CHROM, POS, REF, ALT and FILTER; the
//! reader never holds more than one record in memory.
//!
//! FILTER follows the usual VCF convention: `PASS` and `.` (not evaluated)
//! leave a call unfiltered, anything else marks it filtered.

use std::io::BufRead;
use std::path::Path;

use noodles::vcf;

use crate::core::variant::VariantCall;
use crate::parsing::{open_text_reader, ParseError};
use crate::utils::validation::normalize_bases;

/// Number of mandatory leading columns in a VCF data line
const MIN_COLUMNS: usize = 8;

/// A VCF reader positioned at the first data line
pub struct VariantCallReader {
    header: vcf::Header,
    sample_names: Vec<String>,
    reader: Box<dyn BufRead + Send>,
    line_number: usize,
}

impl VariantCallReader {
    /// Open a VCF file (plain, gzip or bgzip) and read its header
    ///
    /// # Errors
    ///
    /// Returns `ParseError::FileNotFound` if the file is missing, `ParseError::Io`
    /// if it cannot be read, or header errors as for [`VariantCallReader::from_reader`].
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let reader = open_text_reader(path)?;
        Self::from_reader(reader)
    }

    /// Read the header from `reader`, leaving it positioned at the first record
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if the `#CHROM` line is missing, or
    /// `ParseError::Noodles` if noodles rejects the header.
    pub fn from_reader(mut reader: Box<dyn BufRead + Send>) -> Result<Self, ParseError> {
        let mut header_text = String::new();
        let mut line_number = 0;
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(ParseError::InvalidFormat(
                    "VCF header ended without a #CHROM line".to_string(),
                ));
            }
            line_number += 1;

            if !line.starts_with('#') {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected header line, found data on line {line_number}"
                )));
            }

            header_text.push_str(&line);
            if line.starts_with("#CHROM") {
                break;
            }
        }

        let header: vcf::Header = header_text
            .parse()
            .map_err(|e| ParseError::Noodles(format!("Failed to parse VCF header: {e}")))?;

        let sample_names = header
            .sample_names()
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(Self {
            header,
            sample_names,
            reader,
            line_number,
        })
    }

    pub fn header(&self) -> &vcf::Header {
        &self.header
    }

    /// Sample names from the `#CHROM` line, in file order
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }

    /// Consume the reader and iterate over its calls in file order.
    ///
    /// The iterator is single pass. It stops after the first error.
    pub fn records(self) -> VariantCalls {
        VariantCalls {
            reader: self.reader,
            line_number: self.line_number,
            buf: String::new(),
            done: false,
        }
    }
}

/// Lazy sequence of calls produced by [`VariantCallReader::records`]
pub struct VariantCalls {
    reader: Box<dyn BufRead + Send>,
    line_number: usize,
    buf: String,
    done: bool,
}

impl Iterator for VariantCalls {
    type Item = Result<VariantCall, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.buf.trim_end_matches(['\n', '\r']);
                    if line.is_empty() {
                        continue;
                    }
                    let result = parse_record_line(line, self.line_number);
                    if result.is_err() {
                        self.done = true;
                    }
                    return Some(result);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
        None
    }
}

/// Decode one VCF data line
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the line has too few columns or POS
/// is not a number.
pub fn parse_record_line(line: &str, line_number: usize) -> Result<VariantCall, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_COLUMNS {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_number} has {} columns, expected at least {MIN_COLUMNS}",
            fields.len()
        )));
    }

    let contig = fields[0];
    let start: u64 = fields[1].parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid position on line {line_number}: '{}'",
            fields[1]
        ))
    })?;
    let reference_bases = normalize_bases(fields[3]);

    // A lone '.' means no alternate allele was called
    let alternate_alleles = match fields[4] {
        "." | "" => Vec::new(),
        alt => alt.split(',').map(normalize_bases).collect(),
    };

    let filtered = is_filtered(fields[6]);

    Ok(VariantCall::new(contig, start, reference_bases, alternate_alleles).with_filtered(filtered))
}

fn is_filtered(filter: &str) -> bool {
    !matches!(filter, "PASS" | "." | "")
}
