use tracing_subscriber::{EnvFilter, fmt};

/// Installs the stderr logger. stdout is reserved for command output.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("project_snapshot={default_level}")));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
