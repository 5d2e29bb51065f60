//! Subscriber filter selection.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_DIRECTIVE: &str = "themeguard=info";

/// Build the log filter from `--log-level` and the `RUST_LOG` value.
///
/// The default directive applies only when neither is given, so a bare
/// `RUST_LOG=debug` reaches every crate.
pub fn build_filter(log_level: Option<&str>, rust_log: Option<&str>) -> EnvFilter {
    match (log_level, rust_log) {
        (Some(directive), env) => EnvFilter::new(env.unwrap_or_default()).add_directive(
            directive
                .parse()
                .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
        ),
        (None, Some(env)) => EnvFilter::new(env),
        (None, None) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}
