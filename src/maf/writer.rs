//! MAF file writing
//!
//! Rows may carry different column sets (counts resolved for some records
//! only, INFO passthrough hits and misses), so the header is the union of
//! all row columns in first-occurrence order and missing cells are filled
//! with NA.

use crate::core::io::DEFAULT_BUFFER_SIZE;
use crate::maf::row::{MafRow, NA_VALUE};
use indexmap::IndexSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write assembled rows as a tab-separated MAF file
pub fn write_standardized_mutation_file<P: AsRef<Path>>(
    rows: &[MafRow],
    output_path: P,
) -> io::Result<()> {
    let file = File::create(output_path.as_ref())?;
    if rows.is_empty() {
        return Ok(());
    }

    let mut columns: IndexSet<&str> = IndexSet::new();
    for row in rows {
        for column in row.keys() {
            columns.insert(column.as_str());
        }
    }

    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let header = columns.iter().copied().collect::<Vec<_>>().join("\t");
    writeln!(writer, "{header}")?;

    for row in rows {
        let line = columns
            .iter()
            .map(|column| row.get(*column).map_or(NA_VALUE, String::as_str))
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(writer, "{line}")?;
    }

    writer.flush()
}
