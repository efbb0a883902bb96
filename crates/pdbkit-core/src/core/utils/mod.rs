//! Small helpers shared by the tools: geometric reductions over coordinate lists,
//! backbone atom selection and the number formatting used in tool output.

pub mod format;
pub mod geometry;
pub mod identifiers;
