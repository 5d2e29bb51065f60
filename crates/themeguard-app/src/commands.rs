//! Subcommand handlers.

use std::io::{Read, Write};
use std::path::Path;

use themeguard_common::Result;
use themeguard_config::{loader, sanitize_css_report, validate, FONT_PRESETS};
use tracing::{debug, info};

use crate::cli::Command;

/// Dispatch a parsed subcommand. Primary output goes to `out`, diagnostics
/// to `err`.
pub fn run(command: Command, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    match command {
        Command::Validate { file } => validate_file(&file, out),
        Command::Sanitize { file, report } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            sanitize_text(&input, report, out, err)
        }
        Command::Presets => {
            for preset in FONT_PRESETS {
                writeln!(out, "{preset}")?;
            }
            Ok(())
        }
    }
}

fn validate_file(path: &Path, out: &mut impl Write) -> Result<()> {
    let settings = loader::load_from_path(path)?;
    validate(Some(&settings))?;
    info!("{} is valid", path.display());
    writeln!(out, "ok")?;
    Ok(())
}

fn sanitize_text(
    input: &str,
    report: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let sanitized = sanitize_css_report(input)?;
    writeln!(out, "{}", sanitized.css)?;
    if report {
        writeln!(err, "kept: {}, dropped: {}", sanitized.kept, sanitized.dropped)?;
    }
    Ok(())
}

/// Map a command result to the process exit status, printing any error to `err`.
pub fn exit_status(result: Result<()>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!("command failed: {e:?}");
            // Nothing more to do if stderr itself is gone
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}
