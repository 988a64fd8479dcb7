//! Error types for vcf2maf-lite
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Header or sample-role resolution errors
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Data line parsing errors
    #[error(transparent)]
    Record(#[from] RecordError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing the header or resolving sample roles
///
/// Message texts are part of the tool's contract; callers match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// No column-header line before end of file
    #[error("No column header line found")]
    MissingColumnHeader,

    /// Column-header line carries no sample columns
    #[error("No sample column found")]
    NoSampleColumn,

    /// More than two sample columns
    #[error("Expected max 2 sample columns for tumor and normal sample. But found {0} columns.")]
    TooManySampleColumns(usize),

    /// A single sample column carrying the NORMAL label
    #[error("There is only one sample column and it has NORMAL label. No tumor sample column present.")]
    NormalOnly,

    /// Only one of tumor_sample/normal_sample declared in the meta lines
    #[error("The tumor_sample and normal_sample are expected together in the header, but only {0} was found.")]
    UnpairedDeclaration(&'static str),

    /// A declared sample name matches no sample column
    #[error("There is {key}={name} in the header, but no respective column found.")]
    DeclaredSampleMissing { key: &'static str, name: String },

    /// An explicit tumor/normal override matches no sample column
    #[error("The {role} sample override '{name}' does not match any sample column.")]
    OverrideMissing { role: &'static str, name: String },
}

/// Errors raised while parsing a data line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// POS field failed to parse as a 1-based integer
    #[error("Invalid POS value '{value}' at line {line}")]
    InvalidPos { line: usize, value: String },
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Result type alias for header and sample-role operations
pub type HeaderResult<T> = std::result::Result<T, HeaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_error_messages() {
        assert_eq!(HeaderError::NoSampleColumn.to_string(), "No sample column found");
        assert_eq!(
            HeaderError::TooManySampleColumns(3).to_string(),
            "Expected max 2 sample columns for tumor and normal sample. But found 3 columns."
        );
        assert_eq!(
            HeaderError::NormalOnly.to_string(),
            "There is only one sample column and it has NORMAL label. No tumor sample column present."
        );
        assert_eq!(
            HeaderError::DeclaredSampleMissing {
                key: "normal_sample",
                name: "S1".to_string(),
            }
            .to_string(),
            "There is normal_sample=S1 in the header, but no respective column found."
        );
        assert!(HeaderError::UnpairedDeclaration("tumor_sample")
            .to_string()
            .contains("The tumor_sample and normal_sample are expected together"));
    }

    #[test]
    fn test_convert_error_is_transparent_for_header() {
        let err: ConvertError = HeaderError::NoSampleColumn.into();
        assert_eq!(err.to_string(), "No sample column found");
    }

    #[test]
    fn test_record_error_message_carries_line() {
        let err = RecordError::InvalidPos {
            line: 7,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid POS value 'abc' at line 7");
    }
}
