//! MAF row assembly
//!
//! Builds the ordered output row for one variant: the fixed MAF columns,
//! per-sample depth counts, caller-requested INFO passthrough columns,
//! and raw FORMAT count columns.

use crate::convert::ConvertOptions;
use crate::core::alleles::normalize;
use crate::core::counts::resolve_depth_counts;
use crate::core::record::VariantRecord;
use crate::core::samples::SampleRoles;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Ordered output row: column name to text value
pub type MafRow = IndexMap<String, String>;

/// Missing-value text used across output columns
pub const NA_VALUE: &str = "NA";

/// Build the output row for one variant record
pub fn assemble_row(
    record: &VariantRecord,
    roles: &SampleRoles,
    options: &ConvertOptions,
) -> MafRow {
    let normalized = normalize(record.pos, &record.ref_allele, &record.alt_allele);

    let mut row = MafRow::new();
    insert(&mut row, "Hugo_Symbol", "Unknown");
    insert(&mut row, "Entrez_Gene_Id", "0");
    insert(&mut row, "Center", &options.center);
    insert(&mut row, "Chromosome", &record.chrom);
    insert(&mut row, "Start_Position", &normalized.start.to_string());
    insert(&mut row, "End_Position", &normalized.end.to_string());
    insert(&mut row, "Strand", "+");
    if let Some(classification) = normalized.classification {
        insert(&mut row, "Variant_Classification", classification.as_str());
    }
    insert(&mut row, "Variant_Type", normalized.variant_type.as_str());
    insert(&mut row, "Reference_Allele", &normalized.ref_allele);
    insert(&mut row, "Tumor_Seq_Allele1", &normalized.ref_allele);
    insert(&mut row, "Tumor_Seq_Allele2", &normalized.alt_allele);
    insert(&mut row, "dbSNP_RS", &record.id);
    insert(&mut row, "Tumor_Sample_Barcode", &roles.tumor);
    insert(&mut row, "Matched_Norm_Sample_Barcode", &roles.normal);
    insert(&mut row, "Sequence_Source", &options.sequence_source);

    // Depth counts stay absent when no caller convention matches
    if let Some(counts) = record
        .tumor
        .as_ref()
        .and_then(|g| resolve_depth_counts(g, &record.ref_allele))
    {
        insert(&mut row, "t_ref_count", &counts.ref_count.to_string());
        insert(&mut row, "t_alt_count", &counts.alt_count.to_string());
        insert(&mut row, "t_depth", &counts.depth.to_string());
    }
    if let Some(counts) = record
        .normal
        .as_ref()
        .and_then(|g| resolve_depth_counts(g, &record.ref_allele))
    {
        insert(&mut row, "n_ref_count", &counts.ref_count.to_string());
        insert(&mut row, "n_alt_count", &counts.alt_count.to_string());
        insert(&mut row, "n_depth", &counts.depth.to_string());
    }

    // Requested INFO keys always appear, NA when absent from this record
    for key in &options.retain_info {
        let value = record
            .info
            .get(key)
            .cloned()
            .unwrap_or_else(|| NA_VALUE.to_string());
        row.insert(key.clone(), value);
    }

    // Requested FORMAT subfields copied verbatim per sample
    for name in &options.retain_format {
        row.insert(format!("t_{name}"), raw_subfield(record.tumor.as_ref(), name));
        row.insert(format!("n_{name}"), raw_subfield(record.normal.as_ref(), name));
    }

    row
}

fn insert(row: &mut MafRow, column: &str, value: &str) {
    row.insert(column.to_string(), value.to_string());
}

fn raw_subfield(genotype: Option<&HashMap<String, String>>, name: &str) -> String {
    genotype
        .and_then(|g| g.get(name))
        .cloned()
        .unwrap_or_else(|| NA_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::header::parse_header;
    use crate::core::record::{parse_data_line, LineOutcome};
    use crate::core::samples::resolve_sample_roles;

    fn row_for(samples: &[&str], line: &str, options: &ConvertOptions) -> MafRow {
        let text = format!(
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\t{}\n",
            samples.join("\t")
        );
        let header = parse_header(&mut text.as_bytes()).unwrap();
        let roles = resolve_sample_roles(
            &header,
            options.tumor_id.as_deref(),
            options.normal_id.as_deref(),
        )
        .unwrap();
        match parse_data_line(line, 2, &header, &roles).unwrap() {
            LineOutcome::Record(record) => assemble_row(&record, &roles, options),
            LineOutcome::Mismatch(mismatch) => panic!("unexpected mismatch: {mismatch}"),
        }
    }

    #[test]
    fn test_fixed_columns() {
        let options = ConvertOptions {
            center: "center name 1".to_string(),
            sequence_source: "WGS".to_string(),
            ..ConvertOptions::default()
        };
        let row = row_for(
            &["S1"],
            "20\t14370\trs6054257\tG\tA\t29\tPASS\tNS=3;DP=14\tGT:GQ\t0|0:48",
            &options,
        );

        assert_eq!(row["Hugo_Symbol"], "Unknown");
        assert_eq!(row["Entrez_Gene_Id"], "0");
        assert_eq!(row["Center"], "center name 1");
        assert_eq!(row["Chromosome"], "20");
        assert_eq!(row["Start_Position"], "14370");
        assert_eq!(row["End_Position"], "14370");
        assert_eq!(row["Strand"], "+");
        assert_eq!(row["Variant_Type"], "SNP");
        assert_eq!(row["Reference_Allele"], "G");
        assert_eq!(row["Tumor_Seq_Allele1"], "G");
        assert_eq!(row["Tumor_Seq_Allele2"], "A");
        assert_eq!(row["dbSNP_RS"], "rs6054257");
        assert_eq!(row["Tumor_Sample_Barcode"], "S1");
        assert_eq!(row["Matched_Norm_Sample_Barcode"], "NORMAL");
        assert_eq!(row["Sequence_Source"], "WGS");
        // Substitutions carry no frame classification
        assert!(!row.contains_key("Variant_Classification"));
    }

    #[test]
    fn test_counts_from_both_samples() {
        let row = row_for(
            &["TUMOR", "NORMAL"],
            "1\t45796859\t.\tT\tG\t.\tPASS\tDP=1307\tGT:AD:DP\t0/1:920,5:925\t0/0:343,1:344",
            &ConvertOptions::default(),
        );

        assert_eq!(row["t_ref_count"], "920");
        assert_eq!(row["t_alt_count"], "5");
        assert_eq!(row["t_depth"], "925");
        assert_eq!(row["n_ref_count"], "343");
        assert_eq!(row["n_alt_count"], "1");
        assert_eq!(row["n_depth"], "344");
    }

    #[test]
    fn test_counts_absent_without_convention() {
        let row = row_for(
            &["S1"],
            "1\t100\t.\tA\tG\t.\tPASS\tDP=14\tGT:GQ\t0/1:48",
            &ConvertOptions::default(),
        );
        assert!(!row.contains_key("t_ref_count"));
        assert!(!row.contains_key("t_depth"));
        assert!(!row.contains_key("n_ref_count"));
    }

    #[test]
    fn test_retained_info_with_na_fallback() {
        let options = ConvertOptions {
            retain_info: vec!["MuTect2".to_string(), "Strelka2".to_string()],
            ..ConvertOptions::default()
        };
        let row = row_for(
            &["S1"],
            "1\t100\t.\tA\tG\t.\tPASS\tMuTect2;DP=14\tGT\t0/1",
            &options,
        );

        assert_eq!(row["MuTect2"], "1");
        assert_eq!(row["Strelka2"], "NA");
    }

    #[test]
    fn test_retained_format_raw_columns() {
        let options = ConvertOptions {
            retain_format: vec!["ref_count_raw".to_string(), "depth_raw".to_string()],
            ..ConvertOptions::default()
        };
        let row = row_for(
            &["TUMOR", "NORMAL"],
            "1\t100\t.\tA\tG\t.\tPASS\tDP=14\tGT:ref_count_raw:depth_raw\t0/1:1184:1191\t0/0:424:425",
            &options,
        );

        assert_eq!(row["t_ref_count_raw"], "1184");
        assert_eq!(row["n_ref_count_raw"], "424");
        assert_eq!(row["t_depth_raw"], "1191");
        assert_eq!(row["n_depth_raw"], "425");
    }

    #[test]
    fn test_retained_format_na_without_normal_sample() {
        let options = ConvertOptions {
            retain_format: vec!["DP".to_string()],
            ..ConvertOptions::default()
        };
        let row = row_for(&["S1"], "1\t100\t.\tA\tG\t.\tPASS\t.\tGT:DP\t0/1:30", &options);

        assert_eq!(row["t_DP"], "30");
        assert_eq!(row["n_DP"], "NA");
    }

    #[test]
    fn test_indel_classification_column() {
        let row = row_for(
            &["S1"],
            "1\t45796859\t.\tTCATGGCGGTGG\tT\t.\tPASS\t.\tGT\t0/1",
            &ConvertOptions::default(),
        );

        assert_eq!(row["Variant_Classification"], "Frame_Shift_Del");
        assert_eq!(row["Variant_Type"], "DEL");
        assert_eq!(row["Reference_Allele"], "CATGGCGGTGG");
        assert_eq!(row["Tumor_Seq_Allele2"], "-");
        assert_eq!(row["Start_Position"], "45796860");
        assert_eq!(row["End_Position"], "45796870");
    }
}
