use crate::cli::ChainArgs;
use crate::error::Result;
use crate::utils::files::load_structure;
use pdbkit::workflows;
use std::io::Write;

pub fn run(args: ChainArgs, out: &mut impl Write) -> Result<()> {
    let structure = load_structure(&args.input)?;
    let report = workflows::chain::run(&structure, args.chain_id)?;
    report.write_to(out)?;
    Ok(())
}
