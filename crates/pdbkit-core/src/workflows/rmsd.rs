use crate::core::models::structure::Structure;
use crate::core::utils::geometry::axis_squared_deviations;
use crate::workflows::config::{CompatMode, ToolConfig};
use crate::workflows::error::WorkflowError;
use nalgebra::Point3;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct RmsdReport {
    pub compat: CompatMode,
    pub rmsd: f64,
    /// Number of atom pairs whose deviations were summed.
    pub pairs: usize,
    /// Count the summed squared deviation was divided by.
    pub denominator: usize,
}

impl RmsdReport {
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", self.compat.format_float(self.rmsd))
    }
}

fn backbone_positions(
    structure: &Structure,
    config: &ToolConfig,
    label: &'static str,
) -> Result<Vec<Point3<f64>>, WorkflowError> {
    let columns = config.compat.coordinate_columns();
    structure
        .records()
        .iter()
        .filter(|record| config.backbone.matches(record))
        .map(|record| {
            record
                .coordinates(columns)
                .map_err(|e| WorkflowError::record(label, record.line_number(), e))
        })
        .collect()
}

/// Root-mean-square deviation between the backbone atoms of two structures.
///
/// Atoms are paired by position; no superposition is performed. In legacy mode the final
/// pair is left out of the sum while the denominator stays the first structure's backbone
/// count, as the tool has always printed. Corrected mode sums every pair and
/// requires both backbones to have the same length.
#[instrument(skip_all, name = "rmsd_workflow")]
pub fn run(
    first: &Structure,
    second: &Structure,
    config: &ToolConfig,
) -> Result<RmsdReport, WorkflowError> {
    let coords1 = backbone_positions(first, config, "first")?;
    let coords2 = backbone_positions(second, config, "second")?;
    debug!(
        "Backbone atoms: {} in first structure, {} in second.",
        coords1.len(),
        coords2.len()
    );

    if coords1.is_empty() {
        return Err(WorkflowError::NoMatchingAtoms {
            selection: config.backbone.describe(),
            structure: "first",
        });
    }

    let pairs = config.compat.compared_positions(coords1.len());
    let length_ok = match config.compat {
        CompatMode::Legacy => coords2.len() >= pairs,
        CompatMode::Corrected => coords2.len() == pairs,
    };
    if !length_ok {
        return Err(WorkflowError::LengthMismatch {
            selection: config.backbone.describe(),
            structure: "second",
            expected: pairs,
            found: coords2.len(),
        });
    }

    let deviations = axis_squared_deviations(&coords1[..pairs], &coords2[..pairs]);
    let denominator = coords1.len();
    let rmsd = ((deviations.x + deviations.y + deviations.z) / denominator as f64).sqrt();
    info!("RMSD over {} pairs: {:.4}", pairs, rmsd);

    Ok(RmsdReport {
        compat: config.compat,
        rmsd,
        pairs,
        denominator,
    })
}
