use crate::cli::RmsdArgs;
use crate::error::Result;
use crate::utils::files::load_structure;
use pdbkit::workflows::{self, config::ToolConfig};
use std::io::Write;
use tracing::debug;

pub fn run(args: RmsdArgs, config: &ToolConfig, out: &mut impl Write) -> Result<()> {
    let first = load_structure(&args.first)?;
    let second = load_structure(&args.second)?;
    let report = workflows::rmsd::run(&first, &second, config)?;
    debug!(
        "Summed {} pairs, divided by {}.",
        report.pairs, report.denominator
    );
    report.write_to(out)?;
    Ok(())
}
