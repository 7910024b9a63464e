use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber. `RUST_LOG` wins over `verbosity`; each
/// `-v` raises the default level by one step.
pub fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => DEFAULT_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be set (e.g. by an embedding test); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
