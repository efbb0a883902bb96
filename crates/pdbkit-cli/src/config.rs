use crate::cli::Cli;
use crate::error::{CliError, Result};
use pdbkit::workflows::config::{CompatMode, ToolConfig, ToolConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCompatibilityConfig {
    mode: Option<CompatMode>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSelectionConfig {
    #[serde(rename = "backbone-atoms")]
    backbone_atoms: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialToolConfig {
    compatibility: Option<PartialCompatibilityConfig>,
    selection: Option<PartialSelectionConfig>,
}

impl PartialToolConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty partial config.
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings. Precedence: dedicated flags, then `--set`, then the
    /// file, then library defaults.
    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<ToolConfig> {
        self.apply_set_values(&cli.set_values)?;

        let compat = cli
            .compat
            .map(CompatMode::from)
            .or(self.compatibility.and_then(|c| c.mode));
        let backbone_atoms = if cli.backbone_atoms.is_empty() {
            self.selection.and_then(|s| s.backbone_atoms)
        } else {
            Some(cli.backbone_atoms.clone())
        };

        let mut builder = ToolConfigBuilder::new();
        if let Some(mode) = compat {
            builder = builder.compat(mode);
        }
        if let Some(names) = backbone_atoms {
            builder = builder.backbone_atoms(names);
        }
        let config = builder.build()?;
        debug!(
            "Resolved configuration: compat={}, backbone={}",
            config.compat,
            config.backbone.describe()
        );
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "compatibility.mode" => {
                    self.compatibility
                        .get_or_insert_with(Default::default)
                        .mode = Some(value_str.parse()?);
                }
                "selection.backbone-atoms" => {
                    let names = value_str
                        .split(',')
                        .filter(|name| !name.trim().is_empty())
                        .map(|name| name.trim().to_string())
                        .collect();
                    self.selection
                        .get_or_insert_with(Default::default)
                        .backbone_atoms = Some(names);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
