//! Data reading and representation.
//!
//! This module reads delimited numeric text files into matrices and decides
//! how many dimensions they carry.

mod loader;
mod table;

pub use loader::{parse_table, read_table, ColumnRule};
pub use table::{finite_min_max, NumericTable};
