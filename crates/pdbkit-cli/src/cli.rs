use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdbkit::workflows::config::CompatMode;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "PDBKIT - Small fixed-column PDB tools: geometric centre, chain filter, residue differ, pocket builder and backbone RMSD.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reproduce the historical output exactly (legacy) or fix its boundary quirks (corrected).
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub compat: Option<CompatModeArg>,

    /// Atom name marking a residue's backbone reference atom. Can be used multiple times.
    #[arg(long = "backbone", global = true, value_name = "NAME")]
    pub backbone_atoms: Vec<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S compatibility.mode=corrected
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Write the tool's output to a file instead of standard output.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// `true` for rejections caused by too few or too many arguments. Those print usage and
/// exit with status 0; every other parse error keeps clap's exit status.
pub fn is_argument_count_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::TooManyValues
            | ErrorKind::UnknownArgument
    )
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatModeArg {
    Legacy,
    Corrected,
}

impl From<CompatModeArg> for CompatMode {
    fn from(arg: CompatModeArg) -> Self {
        match arg {
            CompatModeArg::Legacy => CompatMode::Legacy,
            CompatModeArg::Corrected => CompatMode::Corrected,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the mean position of all ATOM records as `x,y,z`.
    Centre(CentreArgs),
    /// Print the ATOM records of one chain, unmodified.
    Chain(ChainArgs),
    /// Report backbone residues whose identifiers differ between two structures.
    ChangeResidues(ChangeResiduesArgs),
    /// Carve the residues named by a pocket file out of a structure and append a ligand.
    MakePocket(MakePocketArgs),
    /// Print the backbone RMSD between two structures, paired by position.
    Rmsd(RmsdArgs),
}

#[derive(Args, Debug)]
pub struct CentreArgs {
    /// PDB file to average.
    #[arg(value_name = "PDB")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct ChainArgs {
    /// PDB file to filter.
    #[arg(value_name = "PDB")]
    pub input: PathBuf,

    /// Single-character chain identifier (case-sensitive).
    #[arg(value_name = "CHAIN_ID")]
    pub chain_id: char,
}

#[derive(Args, Debug)]
pub struct ChangeResiduesArgs {
    /// Structure whose residue identifiers are reported.
    #[arg(value_name = "PDB1")]
    pub first: PathBuf,

    /// Structure whose residue names are reported as replacements.
    #[arg(value_name = "PDB2")]
    pub second: PathBuf,
}

#[derive(Args, Debug)]
pub struct MakePocketArgs {
    /// Pocket definition file; only its ATOM residue identifiers are used.
    #[arg(value_name = "POCKET")]
    pub pocket: PathBuf,

    /// Full structure the pocket residues are taken from.
    #[arg(value_name = "PDB")]
    pub structure: PathBuf,

    /// Ligand file appended as HETATM records on chain X.
    #[arg(value_name = "LIGAND")]
    pub ligand: PathBuf,
}

#[derive(Args, Debug)]
pub struct RmsdArgs {
    #[arg(value_name = "PDB1")]
    pub first: PathBuf,

    #[arg(value_name = "PDB2")]
    pub second: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from([
            "pdbkit",
            "rmsd",
            "a.pdb",
            "b.pdb",
            "--compat",
            "corrected",
            "--backbone",
            "CA",
            "--backbone",
            "N",
            "-vv",
        ]);

        assert_eq!(cli.compat, Some(CompatModeArg::Corrected));
        assert_eq!(cli.backbone_atoms, vec!["CA", "N"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Rmsd(_)));
    }

    #[test]
    fn chain_id_must_be_a_single_character() {
        let ok = Cli::try_parse_from(["pdbkit", "chain", "in.pdb", "B"]);
        let bad = Cli::try_parse_from(["pdbkit", "chain", "in.pdb", "AB"]);

        match ok.unwrap().command {
            Commands::Chain(args) => assert_eq!(args.chain_id, 'B'),
            other => panic!("Expected 'chain' subcommand, got {:?}", other),
        }
        assert!(bad.is_err());
    }

    #[test]
    fn missing_positional_argument_is_a_usage_error() {
        let result = Cli::try_parse_from(["pdbkit", "make-pocket", "pocket.pdb", "full.pdb"]);
        assert!(result.is_err());
    }

    fn rejection_kind(args: &[&str]) -> ErrorKind {
        Cli::try_parse_from(args.iter().copied()).unwrap_err().kind()
    }

    #[test]
    fn wrong_argument_count_exits_cleanly() {
        for args in [
            &["pdbkit", "rmsd", "a.pdb"][..],
            &["pdbkit", "rmsd", "a.pdb", "b.pdb", "c.pdb"],
            &["pdbkit", "centre"],
            &["pdbkit"],
        ] {
            let kind = rejection_kind(args);
            assert!(
                is_argument_count_error(kind),
                "{:?} gave {:?}",
                args,
                kind
            );
        }
    }

    #[test]
    fn invalid_values_keep_usage_error_status() {
        let kind = rejection_kind(&["pdbkit", "--compat", "strict", "centre", "in.pdb"]);
        assert_eq!(kind, ErrorKind::InvalidValue);
        assert!(!is_argument_count_error(kind));
        assert!(!is_argument_count_error(rejection_kind(&[
            "pdbkit", "chain", "in.pdb", "AB"
        ])));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["pdbkit", "-q", "-v", "centre", "in.pdb"]);
        assert!(result.is_err());
    }

    #[test]
    fn compat_arg_maps_onto_library_mode() {
        assert_eq!(CompatMode::from(CompatModeArg::Legacy), CompatMode::Legacy);
        assert_eq!(
            CompatMode::from(CompatModeArg::Corrected),
            CompatMode::Corrected
        );
    }
}
