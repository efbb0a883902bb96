use crate::core::models::record::RecordError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("No {selection} records found in the {structure} structure")]
    NoMatchingAtoms {
        selection: String,
        structure: &'static str,
    },

    #[error(
        "The {structure} structure has {found} {selection} records where {expected} are needed for a positional comparison"
    )]
    LengthMismatch {
        selection: String,
        structure: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid record on line {line} of the {structure} structure: {source}")]
    Record {
        structure: &'static str,
        line: usize,
        #[source]
        source: RecordError,
    },
}

impl WorkflowError {
    pub(crate) fn record(structure: &'static str, line: usize, source: RecordError) -> Self {
        WorkflowError::Record {
            structure,
            line,
            source,
        }
    }
}
