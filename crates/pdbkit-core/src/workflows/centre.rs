use crate::core::models::structure::Structure;
use crate::core::utils::geometry::calculate_centroid;
use crate::workflows::config::{CompatMode, ToolConfig};
use crate::workflows::error::WorkflowError;
use nalgebra::Point3;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct CentreReport {
    pub compat: CompatMode,
    pub centre: Point3<f64>,
    pub atom_count: usize,
}

impl CentreReport {
    /// Writes the single `x,y,z` line.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{}",
            self.compat.format_float(self.centre.x),
            self.compat.format_float(self.centre.y),
            self.compat.format_float(self.centre.z)
        )
    }
}

/// Computes the mean position of every `ATOM` record in `structure`.
#[instrument(skip_all, name = "centre_workflow")]
pub fn run(structure: &Structure, config: &ToolConfig) -> Result<CentreReport, WorkflowError> {
    let columns = config.compat.coordinate_columns();
    let positions = structure
        .atoms()
        .map(|record| {
            record
                .coordinates(columns)
                .map_err(|e| WorkflowError::record("input", record.line_number(), e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Collected {} ATOM positions.", positions.len());

    let centre = calculate_centroid(&positions).ok_or_else(|| WorkflowError::NoMatchingAtoms {
        selection: "ATOM".to_string(),
        structure: "input",
    })?;
    info!("Centre of {} atoms computed.", positions.len());

    Ok(CentreReport {
        compat: config.compat,
        centre,
        atom_count: positions.len(),
    })
}
