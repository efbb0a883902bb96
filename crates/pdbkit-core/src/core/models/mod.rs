//! # Core Models Module
//!
//! Data structures representing PDB text as the tools see it: a list of fixed-width
//! lines, a handful of which are coordinate records.
//!
//! ## Key Components
//!
//! - [`columns`] - Named column ranges for every field the tools read or write
//! - [`record`] - A single line with field accessors and record-level errors
//! - [`structure`] - An ordered list of records loaded from one file
//!
//! ```ignore
//! use pdbkit::core::models::{record::PdbRecord, columns::LEGACY_COORDINATES};
//!
//! let record = PdbRecord::new(1, line);
//! if record.is_atom() {
//!     let position = record.coordinates(&LEGACY_COORDINATES)?;
//! }
//! ```

pub mod columns;
pub mod record;
pub mod structure;
