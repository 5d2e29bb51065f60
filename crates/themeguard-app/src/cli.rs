use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Themeguard: validate and sanitize user theme settings.
#[derive(Parser, Debug)]
#[command(name = "themeguard", version, about)]
pub struct Args {
    /// Log level override (e.g. debug, themeguard=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a theme settings file (.json, .toml, .yaml).
    Validate {
        /// Settings file path.
        file: PathBuf,
    },

    /// Sanitize raw custom CSS and print the result.
    Sanitize {
        /// CSS file to read. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Print kept/dropped declaration counts to stderr.
        #[arg(long)]
        report: bool,
    },

    /// List the available font presets.
    Presets,
}

pub fn parse() -> Args {
    Args::parse()
}
