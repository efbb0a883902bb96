mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands, is_argument_count_error};
use crate::config::PartialToolConfig;
use crate::error::{CliError, Result};
use crate::utils::files::open_output;
use clap::Parser;
use std::io::Write;
use tracing::{debug, error, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_argument_count_error(e.kind()) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = run_app(cli) {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("PDBKIT v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = PartialToolConfig::load(&cli)?.merge_with_cli(&cli)?;
    let mut out = open_output(cli.output.as_deref())?;

    match cli.command {
        Commands::Centre(args) => {
            info!("Dispatching to 'centre' command.");
            commands::centre::run(args, &config, &mut out)
        }
        Commands::Chain(args) => {
            info!("Dispatching to 'chain' command.");
            commands::chain::run(args, &mut out)
        }
        Commands::ChangeResidues(args) => {
            info!("Dispatching to 'change-residues' command.");
            commands::residues::run(args, &config, &mut out)
        }
        Commands::MakePocket(args) => {
            info!("Dispatching to 'make-pocket' command.");
            commands::make_pocket::run(args, &config, &mut out)
        }
        Commands::Rmsd(args) => {
            info!("Dispatching to 'rmsd' command.");
            commands::rmsd::run(args, &config, &mut out)
        }
    }?;

    out.flush()?;
    info!("Command completed successfully.");
    Ok(())
}
