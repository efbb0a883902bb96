//! # Workflows Module
//!
//! One module per tool. Each workflow takes structures that are already loaded, a
//! [`config::ToolConfig`] where behavior can vary, and returns a report that renders
//! itself with `write_to` in the exact text form the tool prints.
//!
//! ## Tools
//!
//! - **Centre** ([`centre`]) - Mean position of all `ATOM` records
//! - **Chain** ([`chain`]) - `ATOM` records of one chain, echoed verbatim
//! - **Residue Differ** ([`residues`]) - Positional comparison of backbone residue identifiers
//! - **Pocket Builder** ([`pocket`]) - Residues named by a pocket file, plus a rewritten ligand
//! - **RMSD** ([`rmsd`]) - Backbone root-mean-square deviation without superposition
//!
//! ## Compatibility
//!
//! Several tools carry boundary quirks (a skipped final pair, a blank-line artifact,
//! truncated coordinate columns). [`config::CompatMode::Legacy`] reproduces them exactly;
//! [`config::CompatMode::Corrected`] fixes them.

pub mod centre;
pub mod chain;
pub mod config;
pub mod error;
pub mod pocket;
pub mod residues;
pub mod rmsd;
