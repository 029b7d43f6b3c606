use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fin")]
#[command(about = "Reconcile authenticated principals with finance app users")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a throwaway in-memory user store instead of the configured database
    #[arg(long, global = true)]
    pub memory: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
