pub mod expand;
pub mod formats;

use clap::{ArgAction, Parser, Subcommand};

pub use expand::ExpandArgs;

#[derive(Parser)]
#[command(name = "hostexpand")]
#[command(about = "Expand compact host descriptions into IPv4 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce log output (-q warnings only, -qq errors only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand hosts, ranges, CIDR blocks and host files
    #[command(alias = "e")]
    Expand(ExpandArgs),
    /// List the accepted host formats
    #[command(alias = "f")]
    Formats,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
