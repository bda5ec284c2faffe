mod platform;

use clap::Parser;
use log::LevelFilter;

use platform::cli::CliArgs;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        landing_logging::default_level()
    };
    platform::initialize_logging(args.log.into(), level);

    platform::run_app(args)
}
