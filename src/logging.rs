use tracing_subscriber::EnvFilter;

/// Sets up stderr logging. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
