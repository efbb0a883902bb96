use crate::cli::ChangeResiduesArgs;
use crate::error::Result;
use crate::utils::files::load_structure;
use pdbkit::workflows::{self, config::ToolConfig};
use std::io::Write;
use tracing::info;

pub fn run(args: ChangeResiduesArgs, config: &ToolConfig, out: &mut impl Write) -> Result<()> {
    let first = load_structure(&args.first)?;
    let second = load_structure(&args.second)?;
    let report = workflows::residues::run(&first, &second, config)?;
    if report.differences.is_empty() {
        info!("No residue differences found.");
    }
    report.write_to(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{atom, output_of, write_pdb};
    use pdbkit::workflows::config::{CompatMode, ToolConfigBuilder};
    use tempfile::tempdir;

    #[test]
    fn reports_substitutions_in_both_modes() {
        let dir = tempdir().unwrap();
        let first = write_pdb(
            &dir,
            "wt.pdb",
            &[
                atom(1, "CA", "ALA", 'A', 1, [0.0; 3]),
                atom(2, "CA", "GLY", 'A', 2, [0.0; 3]),
                atom(3, "CA", "SER", 'A', 3, [0.0; 3]),
            ],
        );
        let second = write_pdb(
            &dir,
            "mut.pdb",
            &[
                atom(1, "CA", "ALA", 'A', 1, [0.0; 3]),
                atom(2, "CA", "TRP", 'A', 2, [0.0; 3]),
                atom(3, "CA", "LYS", 'A', 3, [0.0; 3]),
            ],
        );
        let corrected = ToolConfigBuilder::new()
            .compat(CompatMode::Corrected)
            .build()
            .unwrap();

        let legacy = output_of(|out| {
            let args = ChangeResiduesArgs {
                first: first.clone(),
                second: second.clone(),
            };
            run(args, &ToolConfig::default(), out).unwrap();
        });
        let fixed = output_of(|out| {
            let args = ChangeResiduesArgs {
                first: first.clone(),
                second: second.clone(),
            };
            run(args, &corrected, out).unwrap();
        });

        assert_eq!(legacy, "GLY A   2  TRP\n");
        assert_eq!(fixed, "GLY A   2  TRP\nSER A   3  LYS\n");
    }
}
