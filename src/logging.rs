//! tracing subscriber setup for the binary
//!
//! Logs go to stderr so stdout stays clean for reports and JSON events.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn, info, debug, trace
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the filter: an explicit `-v` wins, then the configured directive,
/// then `warn`.
pub fn filter_directive(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(directive)) => directive.to_string(),
        (v, _) => level_for_verbosity(v).to_string(),
    }
}

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(verbose: u8, configured: Option<&str>) {
    let directive = filter_directive(verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
