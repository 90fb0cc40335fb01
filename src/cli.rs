use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Portfolio contact form in the terminal",
    long_about = "Fill in and send the portfolio contact form.\n\n\
                  Fields are validated before sending; the theme choice is remembered between runs."
)]
pub struct Cli {
    /// YAML file with fields, copy, timings and the endpoint.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where the theme preference is stored.
    #[arg(long = "prefs", value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Write logs to this file (logs are discarded otherwise).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
