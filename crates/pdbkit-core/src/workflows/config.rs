use crate::core::models::columns::{CANONICAL_COORDINATES, CoordinateColumns, LEGACY_COORDINATES};
use crate::core::utils::format::{format_legacy, format_shortest};
use crate::core::utils::identifiers::BackboneSelection;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Unknown compatibility mode '{0}'. Expected 'legacy' or 'corrected'.")]
    UnknownCompatMode(String),
    #[error("Backbone atom selection cannot be empty")]
    EmptyBackboneSelection,
    #[error("Backbone atom name '{0}' cannot match the two-column atom name slice")]
    InvalidBackboneAtom(String),
}

/// Whether tools reproduce their historical boundary quirks or fix them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompatMode {
    /// Byte-for-byte the output the tools have always produced.
    #[default]
    Legacy,
    /// Full comparison ranges, textbook RMSD denominator, canonical coordinate columns
    /// and one output line per ligand atom.
    Corrected,
}

impl CompatMode {
    /// Where coordinate fields are read from in this mode.
    pub fn coordinate_columns(self) -> &'static CoordinateColumns {
        match self {
            CompatMode::Legacy => &LEGACY_COORDINATES,
            CompatMode::Corrected => &CANONICAL_COORDINATES,
        }
    }

    /// Number of leading positions compared when walking a sequence of `len` entries.
    /// Legacy mode never reaches the final position.
    pub fn compared_positions(self, len: usize) -> usize {
        match self {
            CompatMode::Legacy => len.saturating_sub(1),
            CompatMode::Corrected => len,
        }
    }

    /// Text form of a printed number: twelve significant digits in legacy mode, the
    /// shortest round-trip digits in corrected mode.
    pub fn format_float(self, value: f64) -> String {
        match self {
            CompatMode::Legacy => format_legacy(value),
            CompatMode::Corrected => format_shortest(value),
        }
    }
}

impl FromStr for CompatMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(CompatMode::Legacy),
            "corrected" => Ok(CompatMode::Corrected),
            other => Err(ConfigError::UnknownCompatMode(other.to_string())),
        }
    }
}

impl fmt::Display for CompatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatMode::Legacy => write!(f, "legacy"),
            CompatMode::Corrected => write!(f, "corrected"),
        }
    }
}

/// Settings shared by every tool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolConfig {
    pub compat: CompatMode,
    pub backbone: BackboneSelection,
}

#[derive(Default)]
pub struct ToolConfigBuilder {
    compat: Option<CompatMode>,
    backbone_atoms: Option<Vec<String>>,
}

impl ToolConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compat(mut self, mode: CompatMode) -> Self {
        self.compat = Some(mode);
        self
    }

    pub fn backbone_atoms(mut self, names: Vec<String>) -> Self {
        self.backbone_atoms = Some(names);
        self
    }

    pub fn build(self) -> Result<ToolConfig, ConfigError> {
        let backbone = match self.backbone_atoms {
            None => BackboneSelection::default(),
            Some(names) if names.is_empty() => return Err(ConfigError::EmptyBackboneSelection),
            Some(names) => {
                if let Some(bad) = names
                    .iter()
                    .find(|name| !BackboneSelection::is_selectable_name(name))
                {
                    return Err(ConfigError::InvalidBackboneAtom(bad.clone()));
                }
                BackboneSelection::new(names.iter().map(|name| name.trim().to_string()))
            }
        };

        Ok(ToolConfig {
            compat: self.compat.unwrap_or_default(),
            backbone,
        })
    }
}
