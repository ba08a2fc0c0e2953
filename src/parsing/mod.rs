//! Readers for the two inputs of a run.
//!
//! - **CIViC variant summaries** ([`civic`]): tab-separated knowledge-base
//!   export, optionally gzip-compressed
//! - **Sample VCF** ([`vcf`]): header parsed with noodles, records streamed
//!   one line at a time
//!
//! Both accept plain files and `.gz`/`.bgz` files. BGZF is a series of gzip
//! members, so one multi-member gzip decoder covers both compressions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use civic_matcher::parsing::vcf::VariantCallReader;
//! use std::path::Path;
//!
//! let reader = VariantCallReader::open(Path::new("sample.vcf.gz")).unwrap();
//! println!("samples: {:?}", reader.sample_names());
//!
//! for result in reader.records() {
//!     let call = result.unwrap();
//!     println!("{}:{} {}", call.contig, call.start, call.reference_bases);
//! }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod civic;
pub mod vcf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed (5000000)")]
    TooManyRecords(usize),
}

/// Check if the path is a gzip or bgzip compressed file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a text file for buffered line reading, decompressing when needed
///
/// # Errors
///
/// Returns `ParseError::FileNotFound` if the path does not exist, or
/// `ParseError::Io` if it cannot be opened.
pub fn open_text_reader(path: &Path) -> Result<Box<dyn BufRead + Send>, ParseError> {
    if !path.exists() {
        return Err(ParseError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
