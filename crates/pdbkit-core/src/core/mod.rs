//! # Core Module
//!
//! Building blocks shared by every tool in PDBKIT.
//!
//! ## Architecture
//!
//! - **Record Representation** ([`models`]) - The fixed-column layout, single PDB records
//!   and whole structures kept line-for-line as they were read
//! - **File I/O** ([`io`]) - Loading structures from readers and paths
//! - **Utilities** ([`utils`]) - Geometric reductions, backbone atom selection and
//!   number formatting for tool output
//!
//! Nothing in this module holds state across calls; every function works on the values
//! it is handed.

pub mod io;
pub mod models;
pub mod utils;
