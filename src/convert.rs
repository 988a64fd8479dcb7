//! VCF to MAF conversion pipeline
//!
//! Ties the parsing stages together: open the input, parse the header,
//! resolve sample roles, then turn each data line into an output row.

use crate::core::error::Result;
use crate::core::header::parse_header;
use crate::core::io::open_reader;
use crate::core::record::{parse_data_line, LineOutcome, StructuralMismatch};
use crate::core::samples::resolve_sample_roles;
use crate::maf::row::{assemble_row, MafRow};
use crate::maf::writer::write_standardized_mutation_file;
use std::path::Path;

/// Conversion settings shared across input files
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Value for the Center output column
    pub center: String,
    /// Value for the Sequence_Source output column
    pub sequence_source: String,
    /// Tumor sample override, used together with `normal_id`
    pub tumor_id: Option<String>,
    /// Normal sample override, used together with `tumor_id`
    pub normal_id: Option<String>,
    /// INFO keys copied into output columns of the same name
    pub retain_info: Vec<String>,
    /// FORMAT subfields copied into t_/n_ prefixed output columns
    pub retain_format: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            center: "NA".to_string(),
            sequence_source: "NA".to_string(),
            tumor_id: None,
            normal_id: None,
            retain_info: Vec::new(),
            retain_format: Vec::new(),
        }
    }
}

/// Result of extracting rows from one input file
#[derive(Debug)]
pub enum Extraction {
    /// Every data line parsed cleanly
    Rows(Vec<MafRow>),
    /// A structural mismatch voided the whole file
    Malformed(StructuralMismatch),
}

/// Parse a VCF file into output rows
///
/// A column-count or genotype-arity mismatch on any data line voids the
/// whole file, so a partially converted MAF is never produced.
pub fn extract_vcf_data_from_file<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<Extraction> {
    let mut reader = open_reader(path.as_ref())?;
    let header = parse_header(&mut reader)?;
    let roles = resolve_sample_roles(
        &header,
        options.tumor_id.as_deref(),
        options.normal_id.as_deref(),
    )?;

    let mut rows = Vec::new();
    let mut line_number = header.line_count;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            continue;
        }

        match parse_data_line(trimmed, line_number, &header, &roles)? {
            LineOutcome::Record(record) => rows.push(assemble_row(&record, &roles, options)),
            LineOutcome::Mismatch(mismatch) => return Ok(Extraction::Malformed(mismatch)),
        }
    }

    Ok(Extraction::Rows(rows))
}

/// Outcome of converting one input file
#[derive(Debug)]
pub enum FileOutcome {
    /// The MAF file was written
    Converted { rows: usize },
    /// The input was structurally malformed and no MAF was written
    Skipped(StructuralMismatch),
}

/// Convert one VCF file into a MAF file
pub fn convert_vcf_to_maf<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<FileOutcome> {
    match extract_vcf_data_from_file(input.as_ref(), options)? {
        Extraction::Rows(rows) => {
            write_standardized_mutation_file(&rows, output.as_ref())?;
            Ok(FileOutcome::Converted { rows: rows.len() })
        }
        Extraction::Malformed(mismatch) => {
            log::warn!("Skipping {}: {}", input.as_ref().display(), mismatch);
            Ok(FileOutcome::Skipped(mismatch))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    const TWO_SAMPLE_VCF: &str = "\
##fileformat=VCFv4.2
##source=strelka
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tTUMOR\tNORMAL
1\t14370\trs6054257\tG\tA\t29\tPASS\tNS=3;DP=14\tGT:AD:DP\t0/1:20,5:25\t0/0:30,0:30
2\t17330\t.\tT\tTA\t3\tq10\tNS=3\tGT:AD:DP\t0/1:18,2:20\t0/0:22,0:22
";

    fn write_vcf(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_extract_rows_from_two_sample_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_vcf(&temp_dir, "input.vcf", TWO_SAMPLE_VCF);

        let extraction = extract_vcf_data_from_file(&path, &ConvertOptions::default()).unwrap();
        let rows = match extraction {
            Extraction::Rows(rows) => rows,
            Extraction::Malformed(mismatch) => panic!("unexpected mismatch: {mismatch}"),
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Tumor_Sample_Barcode"], "TUMOR");
        assert_eq!(rows[0]["Matched_Norm_Sample_Barcode"], "NORMAL");
        assert_eq!(rows[0]["Variant_Type"], "SNP");
        assert_eq!(rows[0]["t_ref_count"], "20");
        assert_eq!(rows[1]["Variant_Type"], "INS");
        assert_eq!(rows[1]["Tumor_Seq_Allele2"], "A");
    }

    #[test]
    fn test_column_count_mismatch_voids_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = "\
##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1
1\t100\t.\tA\tG\t.\tPASS\t.\tGT\t0/1
1\t200\t.\tC\tT\t.\tPASS\t.\tGT\t0/1\textra
";
        let path = write_vcf(&temp_dir, "bad.vcf", content);

        let extraction = extract_vcf_data_from_file(&path, &ConvertOptions::default()).unwrap();
        match extraction {
            Extraction::Malformed(StructuralMismatch::ColumnCount {
                line_number,
                expected,
                found,
            }) => {
                assert_eq!(line_number, 4);
                assert_eq!(expected, 10);
                assert_eq!(found, 11);
            }
            other => panic!("expected column mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let temp_dir = TempDir::new().unwrap();
        let content = "\
##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1
";
        let path = write_vcf(&temp_dir, "empty.vcf", content);

        let extraction = extract_vcf_data_from_file(&path, &ConvertOptions::default()).unwrap();
        match extraction {
            Extraction::Rows(rows) => assert!(rows.is_empty()),
            Extraction::Malformed(mismatch) => panic!("unexpected mismatch: {mismatch}"),
        }
    }

    #[test]
    fn test_convert_writes_maf_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_vcf(&temp_dir, "input.vcf", TWO_SAMPLE_VCF);
        let output = temp_dir.path().join("output.maf");

        let outcome = convert_vcf_to_maf(&input, &output, &ConvertOptions::default()).unwrap();
        match outcome {
            FileOutcome::Converted { rows } => assert_eq!(rows, 2),
            FileOutcome::Skipped(mismatch) => panic!("unexpected skip: {mismatch}"),
        }

        let written = std::fs::read_to_string(&output).unwrap();
        let header = written.lines().next().unwrap();
        assert!(header.starts_with("Hugo_Symbol\tEntrez_Gene_Id\tCenter\tChromosome"));
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn test_convert_skips_malformed_without_output() {
        let temp_dir = TempDir::new().unwrap();
        let content = "\
##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1
1\t100\t.\tA\tG\t.\tPASS\t.\tGT\t0/1\textra
";
        let input = write_vcf(&temp_dir, "bad.vcf", content);
        let output = temp_dir.path().join("bad.maf");

        let outcome = convert_vcf_to_maf(&input, &output, &ConvertOptions::default()).unwrap();
        assert!(matches!(outcome, FileOutcome::Skipped(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_gzip_input_round_trip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.vcf.gz");
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(TWO_SAMPLE_VCF.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let extraction = extract_vcf_data_from_file(&path, &ConvertOptions::default()).unwrap();
        match extraction {
            Extraction::Rows(rows) => assert_eq!(rows.len(), 2),
            Extraction::Malformed(mismatch) => panic!("unexpected mismatch: {mismatch}"),
        }
    }
}
