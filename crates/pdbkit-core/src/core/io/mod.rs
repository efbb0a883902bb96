//! Provides input functionality for PDB text files.
//!
//! Structures are read line by line into memory with every line kept verbatim, terminator
//! included, so that tools echoing records can reproduce them byte for byte. Reading goes
//! through the [`traits::StructureFile`] trait; [`pdb::PdbFile`] is the only format.

pub mod pdb;
pub mod traits;
