//! Allele normalization and variant classification
//!
//! VCF anchors indel records on shared leading bases; the standardized
//! output wants those anchors stripped, start/end positions recomputed,
//! and the variant typed by the trimmed allele shapes.

/// Variant type by trimmed allele shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantType {
    Snp,
    Dnp,
    Tnp,
    Onp,
    Del,
    Ins,
}

impl VariantType {
    /// Output column text
    pub fn as_str(self) -> &'static str {
        match self {
            VariantType::Snp => "SNP",
            VariantType::Dnp => "DNP",
            VariantType::Tnp => "TNP",
            VariantType::Onp => "ONP",
            VariantType::Del => "DEL",
            VariantType::Ins => "INS",
        }
    }
}

/// Frame classification, defined for indels only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantClassification {
    InFrameDel,
    FrameShiftDel,
    InFrameIns,
    FrameShiftIns,
}

impl VariantClassification {
    /// Output column text
    pub fn as_str(self) -> &'static str {
        match self {
            VariantClassification::InFrameDel => "In_Frame_Del",
            VariantClassification::FrameShiftDel => "Frame_Shift_Del",
            VariantClassification::InFrameIns => "In_Frame_Ins",
            VariantClassification::FrameShiftIns => "Frame_Shift_Ins",
        }
    }

    fn deletion(len: u64) -> Self {
        if len % 3 == 0 {
            VariantClassification::InFrameDel
        } else {
            VariantClassification::FrameShiftDel
        }
    }

    fn insertion(len: u64) -> Self {
        if len % 3 == 0 {
            VariantClassification::InFrameIns
        } else {
            VariantClassification::FrameShiftIns
        }
    }
}

/// A normalized variant: trimmed alleles, standardized coordinates,
/// type, and (for indels) frame classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedVariant {
    /// 1-based standardized start position
    pub start: u64,
    /// 1-based standardized end position
    pub end: u64,
    /// Trimmed reference allele, `-` when empty
    pub ref_allele: String,
    /// Trimmed alternate allele, `-` when empty
    pub alt_allele: String,
    pub variant_type: VariantType,
    /// Set for deletions and insertions; substitutions carry none
    pub classification: Option<VariantClassification>,
}

/// Trim shared anchor bases and derive coordinates, type, and classification
pub fn normalize(pos: u64, ref_allele: &str, alt_allele: &str) -> NormalizedVariant {
    // Identical alleles would trim to nothing on both sides; keep them
    // whole and fall into the substitution shape below.
    let prefix = if ref_allele == alt_allele {
        0
    } else {
        common_prefix_len(ref_allele, alt_allele)
    };
    let trimmed_ref = &ref_allele[prefix..];
    let trimmed_alt = &alt_allele[prefix..];
    let ref_len = trimmed_ref.len() as u64;
    let alt_len = trimmed_alt.len() as u64;

    let (start, end, variant_type, classification) = if ref_len == alt_len {
        let start = pos + prefix as u64;
        let end = start + ref_len.saturating_sub(1);
        (start, end, substitution_type(ref_len), None)
    } else if ref_len > alt_len {
        // Unequal non-empty leftovers degrade to the longer side's shape
        let start = pos + 1;
        let end = start + ref_len - 1;
        (
            start,
            end,
            VariantType::Del,
            Some(VariantClassification::deletion(ref_len)),
        )
    } else {
        (
            pos,
            pos + 1,
            VariantType::Ins,
            Some(VariantClassification::insertion(alt_len)),
        )
    };

    NormalizedVariant {
        start,
        end,
        ref_allele: dash_when_empty(trimmed_ref),
        alt_allele: dash_when_empty(trimmed_alt),
        variant_type,
        classification,
    }
}

/// Length of the common leading byte run shared by two alleles
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count()
}

fn substitution_type(len: u64) -> VariantType {
    match len {
        0 | 1 => VariantType::Snp,
        2 => VariantType::Dnp,
        3 => VariantType::Tnp,
        _ => VariantType::Onp,
    }
}

fn dash_when_empty(allele: &str) -> String {
    if allele.is_empty() {
        "-".to_string()
    } else {
        allele.to_string()
    }
}
