mod commands;
mod terminal;

use commands::{CommandLine, Commands, expand, formats};
use hostexpand_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let mut cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        ..Config::default()
    };

    match commands.command {
        Commands::Expand(args) => {
            cfg.seed = args.seed;
            cfg.sort_numeric = args.numeric;
            logging::init_logging(&cfg);
            expand::expand(args, &cfg)
        }
        Commands::Formats => {
            logging::init_logging(&cfg);
            formats::formats();
            Ok(())
        }
    }
}
