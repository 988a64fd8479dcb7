//! Core VCF parsing and variant interpretation
//!
//! This module contains the header and record parsers, sample role
//! resolution, allele normalization, and depth count extraction.

pub mod alleles;
pub mod counts;
pub mod error;
pub mod header;
pub mod io;
pub mod record;
pub mod samples;

pub use alleles::{normalize, NormalizedVariant, VariantClassification, VariantType};
pub use counts::{resolve_depth_counts, DepthCounts};
pub use error::{ConvertError, HeaderError, HeaderResult, RecordError, Result};
pub use header::{parse_header, VcfHeader, FIXED_COLUMN_COUNT};
pub use io::{
    detect_compression, open_reader, CompressionFormat, MappedReader,
    DEFAULT_BUFFER_SIZE, MMAP_THRESHOLD,
};
pub use record::{parse_data_line, LineOutcome, StructuralMismatch, VariantRecord};
pub use samples::{
    resolve_sample_roles, SampleRoles, NORMAL_SAMPLE_KEY, NORMAL_SENTINEL, TUMOR_SAMPLE_KEY,
};
