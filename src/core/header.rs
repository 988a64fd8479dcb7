//! VCF header parsing
//!
//! Parses the leading meta-lines and the column-header line of a VCF file.
//!
//! # Header Layout
//!
//! ```text
//! ##fileformat=VCFv4.2
//! ##normal_sample=S1
//! ##tumor_sample=S2
//! #CHROM  POS  ID  REF  ALT  QUAL  FILTER  INFO  FORMAT  S1  S2
//! ```
//!
//! - Meta-lines start with `##` and hold `key=value` pairs, split on the
//!   first `=` only (values may contain further `=` characters)
//! - Duplicate meta keys keep the first value seen
//! - The column-header line starts with `#`; columns after the ninth
//!   fixed column are sample columns

use crate::core::error::{HeaderError, Result};
use indexmap::IndexMap;
use std::io::BufRead;

/// Number of fixed columns preceding the sample columns
pub const FIXED_COLUMN_COUNT: usize = 9;

/// Parsed VCF header
#[derive(Debug, Clone)]
pub struct VcfHeader {
    /// Meta key/value pairs in file order, first-seen value per key
    pub meta: IndexMap<String, String>,
    /// All column names from the column-header line
    pub columns: Vec<String>,
    /// Sample column names, in header order
    pub sample_columns: Vec<String>,
    /// Number of lines consumed by the header, for data-line numbering
    pub line_count: usize,
}

impl VcfHeader {
    /// Look up a meta key declared in the header
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Position of a sample column by name
    pub fn sample_index(&self, name: &str) -> Option<usize> {
        self.sample_columns.iter().position(|c| c == name)
    }
}

/// Parse the header from a reader
///
/// Consumes lines up to and including the column-header line, leaving the
/// reader positioned at the first data line. Fails when the file ends (or
/// a data line appears) before a column-header line, or when the header
/// carries no sample columns.
pub fn parse_header<R: BufRead>(reader: &mut R) -> Result<VcfHeader> {
    let mut meta = IndexMap::new();
    let mut line_count = 0;
    let mut buf = String::with_capacity(1024);

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(HeaderError::MissingColumnHeader.into());
        }
        line_count += 1;
        let line = buf.trim_end_matches(['\r', '\n']);

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("##") {
            // Split on the first '=' only; values may contain '='
            if let Some((key, value)) = rest.split_once('=') {
                meta.entry(key.to_string()).or_insert_with(|| value.to_string());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix('#') {
            let columns: Vec<String> = rest.split('\t').map(str::to_string).collect();
            if columns.len() <= FIXED_COLUMN_COUNT {
                return Err(HeaderError::NoSampleColumn.into());
            }
            let sample_columns = columns[FIXED_COLUMN_COUNT..].to_vec();
            return Ok(VcfHeader {
                meta,
                columns,
                sample_columns,
                line_count,
            });
        }

        // A data line before any column-header line
        return Err(HeaderError::MissingColumnHeader.into());
    }
}
