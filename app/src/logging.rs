use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `--verbose`, which wins over the configured level.
pub fn init_tracing(configured_level: &str, verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose { "debug" } else { configured_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
