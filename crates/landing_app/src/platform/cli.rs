use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use landing_engine::DEFAULT_ENDPOINT;

use super::logging::LogDestination;

/// Command-line arguments accepted by the `landing` binary.
#[derive(Parser, Debug)]
#[command(
    name = "landing",
    version,
    about = "Blog landing page with URL-synchronized search"
)]
pub struct CliArgs {
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "LANDING_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        help = "Search endpoint; the canonical query string is appended"
    )]
    pub endpoint: String,
    #[arg(
        short,
        long,
        value_name = "QUERY",
        default_value = "",
        help = "Initial location query, e.g. \"?term=rust&year=2020\""
    )]
    pub location: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "LANDING_CONTENT",
        help = "RON file listing projects and posts (default: none)"
    )]
    pub content: Option<PathBuf>,
    #[arg(
        long,
        value_enum,
        default_value_t = LogArg::File,
        help = "Where log output goes"
    )]
    pub log: LogArg,
    #[arg(short, long, help = "Log at debug level")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}
