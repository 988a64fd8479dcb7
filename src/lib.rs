//! vcf2maf-lite - Lightweight VCF to MAF conversion
//!
//! A Rust reimplementation of cBioPortal's vcf2maf_lite, producing minimal
//! MAF files from VCF input without adding annotation.
//!
//! # Features
//!
//! - Tumor/normal sample role resolution from meta lines, column labels,
//!   or explicit overrides
//! - Allele trimming with position and variant type normalization
//! - Read depth extraction across common caller FORMAT conventions
//! - Support for compressed input (gzip, bzip2)
//! - Parallel conversion of whole directories with rayon
//!
//! # Example
//!
//! ```ignore
//! use vcf2maf_lite::convert::{convert_vcf_to_maf, ConvertOptions};
//!
//! let options = ConvertOptions::default();
//! let outcome = convert_vcf_to_maf("sample.vcf", "sample.maf", &options)?;
//! ```

pub mod convert;
pub mod core;
pub mod maf;

// Re-export commonly used types
pub use convert::{
    convert_vcf_to_maf, extract_vcf_data_from_file, ConvertOptions, Extraction, FileOutcome,
};
pub use core::{
    ConvertError, DepthCounts, HeaderError, NormalizedVariant, RecordError, Result, SampleRoles,
    StructuralMismatch, VariantClassification, VariantRecord, VariantType, VcfHeader,
};
pub use maf::{write_standardized_mutation_file, MafRow};
