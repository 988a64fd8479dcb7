//! Data line parsing
//!
//! Splits a tab-delimited record into its fixed fields, the INFO mapping,
//! the FORMAT subfield list, and per-sample genotype mappings for the
//! resolved tumor and normal samples.
//!
//! A data line must carry exactly `9 + sample column count` fields, and
//! each genotype must carry exactly one value per FORMAT subfield. Either
//! violation is a structural mismatch that voids the whole conversion
//! rather than skipping the line: one malformed line means the file's
//! structure is suspect and partial output would be misleading.

use crate::core::error::RecordError;
use crate::core::header::{VcfHeader, FIXED_COLUMN_COUNT};
use crate::core::samples::SampleRoles;
use memchr::memchr;
use std::collections::HashMap;
use std::fmt;

/// One parsed data line
#[derive(Debug, Clone)]
pub struct VariantRecord {
    pub chrom: String,
    /// 1-based position
    pub pos: u64,
    pub id: String,
    pub ref_allele: String,
    /// Alternate allele string, kept verbatim (multi-allelic input is not split)
    pub alt_allele: String,
    pub qual: String,
    pub filter: String,
    /// INFO key/value mapping; bare flag tokens carry the value "1"
    pub info: HashMap<String, String>,
    /// FORMAT subfield names in declared order
    pub format: Vec<String>,
    /// Tumor genotype subfields, absent when the tumor column is missing
    pub tumor: Option<HashMap<String, String>>,
    /// Normal genotype subfields, absent when no matched normal column exists
    pub normal: Option<HashMap<String, String>>,
}

/// Structural disagreement between a data line and the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralMismatch {
    /// Column count differs from the header-implied count
    ColumnCount {
        line_number: usize,
        expected: usize,
        found: usize,
    },
    /// Genotype value count differs from the FORMAT subfield count
    GenotypeArity {
        line_number: usize,
        sample: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for StructuralMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralMismatch::ColumnCount {
                line_number,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} columns, found {}",
                line_number, expected, found
            ),
            StructuralMismatch::GenotypeArity {
                line_number,
                sample,
                expected,
                found,
            } => write!(
                f,
                "line {}: sample {} has {} genotype values for {} FORMAT subfields",
                line_number, sample, found, expected
            ),
        }
    }
}

/// Outcome of parsing one data line
#[derive(Debug)]
pub enum LineOutcome {
    /// Structurally valid record
    Record(VariantRecord),
    /// Structural failure that voids the whole conversion
    Mismatch(StructuralMismatch),
}

/// Parse one data line against the header and resolved sample roles
pub fn parse_data_line(
    line: &str,
    line_number: usize,
    header: &VcfHeader,
    roles: &SampleRoles,
) -> Result<LineOutcome, RecordError> {
    let expected = FIXED_COLUMN_COUNT + header.sample_columns.len();
    let fields = split_fields(line, expected);

    if fields.len() != expected {
        return Ok(LineOutcome::Mismatch(StructuralMismatch::ColumnCount {
            line_number,
            expected,
            found: fields.len(),
        }));
    }

    let pos: u64 = fields[1].parse().map_err(|_| RecordError::InvalidPos {
        line: line_number,
        value: fields[1].to_string(),
    })?;

    let format: Vec<String> = fields[8].split(':').map(str::to_string).collect();

    let tumor = match sample_genotype(&fields, header, &format, &roles.tumor, line_number) {
        Ok(genotype) => genotype,
        Err(mismatch) => return Ok(LineOutcome::Mismatch(mismatch)),
    };
    let normal = match sample_genotype(&fields, header, &format, &roles.normal, line_number) {
        Ok(genotype) => genotype,
        Err(mismatch) => return Ok(LineOutcome::Mismatch(mismatch)),
    };

    Ok(LineOutcome::Record(VariantRecord {
        chrom: fields[0].to_string(),
        pos,
        id: fields[2].to_string(),
        ref_allele: fields[3].to_string(),
        alt_allele: fields[4].to_string(),
        qual: fields[5].to_string(),
        filter: fields[6].to_string(),
        info: parse_info(fields[7]),
        format,
        tumor,
        normal,
    }))
}

/// Split a line on tabs using memchr
fn split_fields(line: &str, expected: usize) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(expected);
    let mut start = 0;

    loop {
        match memchr(b'\t', &bytes[start..]) {
            Some(offset) => {
                fields.push(&line[start..start + offset]);
                start += offset + 1;
            }
            None => {
                fields.push(&line[start..]);
                break;
            }
        }
    }
    fields
}

/// Parse the INFO column into a key/value mapping
///
/// Tokens without `=` are flags and carry the value "1", which is also
/// how flag presence surfaces in output rows. A literal `.` means empty.
fn parse_info(info: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    if info == "." || info.is_empty() {
        return map;
    }
    for token in info.split(';') {
        if token.is_empty() {
            continue;
        }
        match token.split_once('=') {
            Some((key, value)) => {
                map.insert(key.to_string(), value.to_string());
            }
            None => {
                map.insert(token.to_string(), "1".to_string());
            }
        }
    }
    map
}

/// Build one sample's genotype mapping, looked up by column name
///
/// Returns `Ok(None)` when the name matches no sample column (e.g. the
/// NORMAL sentinel in a tumor-only file).
fn sample_genotype(
    fields: &[&str],
    header: &VcfHeader,
    format: &[String],
    name: &str,
    line_number: usize,
) -> Result<Option<HashMap<String, String>>, StructuralMismatch> {
    let Some(index) = header.sample_index(name) else {
        return Ok(None);
    };
    let raw = fields[FIXED_COLUMN_COUNT + index];
    let values: Vec<&str> = raw.split(':').collect();

    if values.len() != format.len() {
        return Err(StructuralMismatch::GenotypeArity {
            line_number,
            sample: name.to_string(),
            expected: format.len(),
            found: values.len(),
        });
    }

    Ok(Some(
        format
            .iter()
            .cloned()
            .zip(values.iter().map(|v| v.to_string()))
            .collect(),
    ))
}
