use crate::cli::MakePocketArgs;
use crate::error::Result;
use crate::utils::files::load_structure;
use pdbkit::workflows::{self, config::ToolConfig};
use std::io::Write;

pub fn run(args: MakePocketArgs, config: &ToolConfig, out: &mut impl Write) -> Result<()> {
    let pocket = load_structure(&args.pocket)?;
    let structure = load_structure(&args.structure)?;
    let ligand = load_structure(&args.ligand)?;
    let report = workflows::pocket::run(&pocket, &structure, &ligand, config)?;
    report.write_to(out)?;
    Ok(())
}
