//! Allele-depth extraction
//!
//! Derives reference/alternate read counts and total depth from a
//! sample's genotype subfields using caller conventions, tried in a
//! fixed order; the first convention whose required subfields are all
//! present wins:
//!
//! 1. `AD` holding a comma-separated ref,alt pair (GATK-style callers)
//! 2. `RD` plus a single-valued `AD` (VarScan)
//! 3. `AU`/`CU`/`GU`/`TU` tier-1 base counts (Strelka)
//! 4. `DV` variant depth within `DP` total depth (SAMtools/bcftools)
//!
//! A matched convention with non-numeric values leaves the counts unset;
//! it does not fall through to later conventions and does not abort the
//! conversion.

use std::collections::HashMap;

/// Ref/alt/total read counts for one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthCounts {
    pub ref_count: u64,
    pub alt_count: u64,
    pub depth: u64,
}

/// Derive depth counts from one sample's genotype
///
/// Returns `None` when no convention matches or the matched convention's
/// values are not usable.
pub fn resolve_depth_counts(
    genotype: &HashMap<String, String>,
    ref_allele: &str,
) -> Option<DepthCounts> {
    // Generic ref,alt pair
    if let Some(ad) = genotype.get("AD") {
        if ad.contains(',') {
            let mut parts = ad.split(',');
            return pair_counts(parts.next()?, parts.next()?);
        }
    }

    // VarScan splits the depths across RD and a single-valued AD
    if let (Some(rd), Some(ad)) = (genotype.get("RD"), genotype.get("AD")) {
        return pair_counts(rd, ad);
    }

    // Strelka tier-1 base counts, one subfield per nucleotide
    if let (Some(au), Some(cu), Some(gu), Some(tu)) = (
        genotype.get("AU"),
        genotype.get("CU"),
        genotype.get("GU"),
        genotype.get("TU"),
    ) {
        return tier1_counts(ref_allele, au, cu, gu, tu);
    }

    // Variant depth DV within total depth DP
    if let (Some(dv), Some(dp)) = (genotype.get("DV"), genotype.get("DP")) {
        let alt_count = parse_count(dv)?;
        let depth = parse_count(dp)?;
        let ref_count = depth.checked_sub(alt_count)?;
        return Some(DepthCounts {
            ref_count,
            alt_count,
            depth,
        });
    }

    None
}

fn parse_count(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// Strelka subfields may carry tier1,tier2 pairs; tier 1 is the leading value
fn tier_count(value: &str) -> Option<u64> {
    parse_count(value.split(',').next()?)
}

fn pair_counts(ref_part: &str, alt_part: &str) -> Option<DepthCounts> {
    let ref_count = parse_count(ref_part)?;
    let alt_count = parse_count(alt_part)?;
    Some(DepthCounts {
        ref_count,
        alt_count,
        depth: ref_count + alt_count,
    })
}

/// Ref count from the REF base's tier, alt count from the largest other tier
fn tier1_counts(
    ref_allele: &str,
    au: &str,
    cu: &str,
    gu: &str,
    tu: &str,
) -> Option<DepthCounts> {
    let (ref_tier, others) = match ref_allele.as_bytes().first()? {
        b'A' | b'a' => (au, [cu, gu, tu]),
        b'C' | b'c' => (cu, [au, gu, tu]),
        b'G' | b'g' => (gu, [au, cu, tu]),
        b'T' | b't' => (tu, [au, cu, gu]),
        _ => return None,
    };
    let ref_count = tier_count(ref_tier)?;
    let alt_count = others.iter().filter_map(|v| tier_count(v)).max()?;
    Some(DepthCounts {
        ref_count,
        alt_count,
        depth: ref_count + alt_count,
    })
}
