use crate::cli::CentreArgs;
use crate::error::Result;
use crate::utils::files::load_structure;
use pdbkit::workflows::{self, config::ToolConfig};
use std::io::Write;

pub fn run(args: CentreArgs, config: &ToolConfig, out: &mut impl Write) -> Result<()> {
    let structure = load_structure(&args.input)?;
    let report = workflows::centre::run(&structure, config)?;
    report.write_to(out)?;
    Ok(())
}
