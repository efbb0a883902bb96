use crate::core::models::columns::Columns;
use crate::core::models::record::clamped_slice;
use crate::core::models::structure::Structure;
use crate::workflows::config::ToolConfig;
use crate::workflows::error::WorkflowError;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// One position where the two residue sequences disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueDifference {
    pub position: usize,
    /// Full residue identifier from the first structure.
    pub residue_id: String,
    /// Residue name prefix of the second structure's identifier.
    pub replacement_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResidueDiffReport {
    pub compared: usize,
    pub differences: Vec<ResidueDifference>,
}

impl ResidueDiffReport {
    /// Writes one `residue_id replacement_name` line per difference.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for diff in &self.differences {
            writeln!(writer, "{} {}", diff.residue_id, diff.replacement_name)?;
        }
        Ok(())
    }
}

fn backbone_residue_ids<'a>(structure: &'a Structure, config: &ToolConfig) -> Vec<&'a str> {
    structure
        .records()
        .iter()
        .filter(|record| config.backbone.matches(record))
        .map(|record| record.residue_key())
        .collect()
}

/// Compares backbone residue identifiers of two structures position by position.
///
/// There is no alignment: an insertion in either structure shifts every later position.
/// If either structure has no backbone records, the report is empty.
#[instrument(skip_all, name = "residue_diff_workflow")]
pub fn run(
    first: &Structure,
    second: &Structure,
    config: &ToolConfig,
) -> Result<ResidueDiffReport, WorkflowError> {
    let ids1 = backbone_residue_ids(first, config);
    let ids2 = backbone_residue_ids(second, config);
    debug!(
        "Backbone residues: {} in first structure, {} in second.",
        ids1.len(),
        ids2.len()
    );

    if ids1.is_empty() || ids2.is_empty() {
        info!("One of the residue sequences is empty; nothing to compare.");
        return Ok(ResidueDiffReport::default());
    }

    let compared = config.compat.compared_positions(ids1.len());
    if ids2.len() < compared {
        return Err(WorkflowError::LengthMismatch {
            selection: config.backbone.describe(),
            structure: "second",
            expected: compared,
            found: ids2.len(),
        });
    }

    let differences: Vec<ResidueDifference> = ids1[..compared]
        .iter()
        .zip(&ids2[..compared])
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(position, (a, b))| ResidueDifference {
            position,
            residue_id: a.to_string(),
            replacement_name: clamped_slice(b, 0..Columns::RESIDUE_NAME_WIDTH).to_string(),
        })
        .collect();

    info!(
        "Compared {} positions, found {} differences.",
        compared,
        differences.len()
    );
    Ok(ResidueDiffReport {
        compared,
        differences,
    })
}
