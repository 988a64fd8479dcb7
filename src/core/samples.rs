//! Tumor/normal sample role resolution
//!
//! Decides which sample column holds the tumor and which the normal
//! sample. Precedence, first match wins:
//!
//! 1. Explicit overrides supplied by the caller (both together)
//! 2. `##tumor_sample=`/`##normal_sample=` meta declarations (both together)
//! 3. A single sample column: that column is the tumor, the normal role
//!    gets the `NORMAL` sentinel
//! 4. Two sample columns: literal `TUMOR`/`NORMAL` labels in either order,
//!    otherwise first column is tumor and second is normal

use crate::core::error::{HeaderError, HeaderResult};
use crate::core::header::VcfHeader;

/// Meta key declaring the tumor sample column
pub const TUMOR_SAMPLE_KEY: &str = "tumor_sample";

/// Meta key declaring the normal sample column
pub const NORMAL_SAMPLE_KEY: &str = "normal_sample";

/// Sentinel barcode used when no matched normal sample is present
pub const NORMAL_SENTINEL: &str = "NORMAL";

/// Resolved tumor/normal sample assignment
///
/// `tumor` always names a real sample column. `normal` names a real
/// column or carries the [`NORMAL_SENTINEL`] when the file has no
/// matched normal; genotype lookups by that name simply find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRoles {
    pub tumor: String,
    pub normal: String,
}

/// Resolve sample roles from overrides, header declarations, or column names
pub fn resolve_sample_roles(
    header: &VcfHeader,
    tumor_override: Option<&str>,
    normal_override: Option<&str>,
) -> HeaderResult<SampleRoles> {
    // Explicit pair bypasses header-based resolution entirely, but each
    // override must still name a real column. A lone override is ignored.
    if let (Some(tumor), Some(normal)) = (tumor_override, normal_override) {
        if header.sample_index(tumor).is_none() {
            return Err(HeaderError::OverrideMissing {
                role: "tumor",
                name: tumor.to_string(),
            });
        }
        if normal != NORMAL_SENTINEL && header.sample_index(normal).is_none() {
            return Err(HeaderError::OverrideMissing {
                role: "normal",
                name: normal.to_string(),
            });
        }
        return Ok(SampleRoles {
            tumor: tumor.to_string(),
            normal: normal.to_string(),
        });
    }

    let declared_tumor = header.meta_value(TUMOR_SAMPLE_KEY);
    let declared_normal = header.meta_value(NORMAL_SAMPLE_KEY);
    match (declared_tumor, declared_normal) {
        (Some(tumor), Some(normal)) => {
            for (key, name) in [(NORMAL_SAMPLE_KEY, normal), (TUMOR_SAMPLE_KEY, tumor)] {
                if header.sample_index(name).is_none() {
                    return Err(HeaderError::DeclaredSampleMissing {
                        key,
                        name: name.to_string(),
                    });
                }
            }
            return Ok(SampleRoles {
                tumor: tumor.to_string(),
                normal: normal.to_string(),
            });
        }
        (Some(_), None) => return Err(HeaderError::UnpairedDeclaration(TUMOR_SAMPLE_KEY)),
        (None, Some(_)) => return Err(HeaderError::UnpairedDeclaration(NORMAL_SAMPLE_KEY)),
        (None, None) => {}
    }

    match header.sample_columns.as_slice() {
        [] => Err(HeaderError::NoSampleColumn),
        [only] if only == NORMAL_SENTINEL => Err(HeaderError::NormalOnly),
        [only] => Ok(SampleRoles {
            tumor: only.clone(),
            normal: NORMAL_SENTINEL.to_string(),
        }),
        [first, second] => {
            let by_label = match (first.as_str(), second.as_str()) {
                ("TUMOR", "NORMAL") => Some((first, second)),
                ("NORMAL", "TUMOR") => Some((second, first)),
                _ => None,
            };
            let (tumor, normal) = by_label.unwrap_or((first, second));
            Ok(SampleRoles {
                tumor: tumor.clone(),
                normal: normal.clone(),
            })
        }
        columns => Err(HeaderError::TooManySampleColumns(columns.len())),
    }
}
