use tracing_subscriber::{fmt, prelude::*, EnvFilter};


/// Install the tracing subscriber for the command-line tool
///
/// The filter comes from, in order: `CITYMAPS_LOG`, `RUST_LOG`, `--log-level`,
/// `--verbose` (debug), otherwise warn. Logs always go to stderr.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_env("CITYMAPS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| {
            EnvFilter::try_new(if level.contains('=') {
                level.to_string()
            } else {
                format!("citymaps={level}")
            })
        })?;

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
