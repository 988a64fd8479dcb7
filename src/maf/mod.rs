//! MAF output
//!
//! Row assembly from parsed variant records and tab-separated file writing.

pub mod row;
pub mod writer;

pub use row::{assemble_row, MafRow, NA_VALUE};
pub use writer::write_standardized_mutation_file;
