mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(logging::build_filter(
            args.log_level.as_deref(),
            rust_log.as_deref(),
        ))
        .init();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = commands::run(args.command, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(commands::exit_status(result, &mut stderr.lock()))
}
