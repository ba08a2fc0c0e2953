//! Centralized validation and helper functions.

/// Maximum number of records accepted from a single knowledge-base file (DOS protection)
pub const MAX_RECORDS: usize = 5_000_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Check whether a string consists only of IUPAC nucleotide codes (any case).
///
/// ```
/// use civic_matcher::utils::validation::is_nucleotide_string;
///
/// assert!(is_nucleotide_string("ACGTN"));
/// assert!(is_nucleotide_string("acgt"));
/// assert!(!is_nucleotide_string("<DEL>"));
/// assert!(!is_nucleotide_string("*"));
/// assert!(!is_nucleotide_string(""));
/// ```
#[must_use]
pub fn is_nucleotide_string(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            matches!(
                b.to_ascii_uppercase(),
                b'A' | b'C'
                    | b'G'
                    | b'T'
                    | b'U'
                    | b'N'
                    | b'R'
                    | b'Y'
                    | b'S'
                    | b'W'
                    | b'K'
                    | b'M'
                    | b'B'
                    | b'D'
                    | b'H'
                    | b'V'
            )
        })
}

/// Normalize an allele string for comparison.
///
/// Nucleotide strings are uppercased so that `acgt` and `ACGT` compare equal.
/// Anything else (symbolic alleles such as `<DEL>`, breakends, `*`) is kept
/// verbatim after trimming.
#[must_use]
pub fn normalize_bases(s: &str) -> String {
    let trimmed = s.trim();
    if is_nucleotide_string(trimmed) {
        trimmed.to_ascii_uppercase()
    } else {
        trimmed.to_string()
    }
}
