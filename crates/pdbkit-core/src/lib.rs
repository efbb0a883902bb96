//! # PDBKIT Core Library
//!
//! Fixed-column PDB record parsing and five small structure tools built on top of it:
//! a geometric centre, a chain filter, a positional residue differ, a binding-pocket
//! carver and a backbone RMSD.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers so that the column conventions live in exactly
//! one place and every tool reads like a straight pass over a list of records.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`PdbRecord`, `Structure`),
//!   the named column layout, file loading, and the small geometric reductions
//!   (centroid, per-axis squared deviations) shared by the tools.
//!
//! - **[`workflows`]: The Public API.** One module per tool. Each takes already-loaded
//!   structures plus a [`workflows::config::ToolConfig`], returns a typed report, and
//!   knows how to render that report in the exact text form the tools have always
//!   printed.

pub mod core;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_utils;
