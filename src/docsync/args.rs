use clap::{Parser, Subcommand, ValueEnum};
use docsync::model::MatchMode;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MatchModeArg {
    Shortest,
    Longest,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Shortest => MatchMode::Shortest,
            MatchModeArg::Longest => MatchMode::Longest,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "docsync", version)]
#[command(
    about = "Copy GUID documentation fragments into application readmes",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the fragments (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// How far an image reference extends (overrides docsync.json)
    #[arg(long, global = true, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy every fragment into its readme (default)
    Sync,

    /// Report readmes that differ from their fragment, without writing
    Check,

    /// List configured entries
    #[command(alias = "ls")]
    List,

    /// Show the effective configuration
    Config,

    /// Write docsync.json populated with the built-in entries
    Init {
        /// Overwrite an existing docsync.json
        #[arg(long)]
        force: bool,
    },
}
