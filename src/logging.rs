//! `tracing` setup for the command line tool.
//!
//! Quiet runs only report warnings, on stderr. Verbose runs report progress on
//! stdout. `RUST_LOG`, when set, replaces the default filter in both cases.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let registry = tracing_subscriber::registry().with(env_filter);
    let initialised = if verbose {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stdout))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };
    initialised.map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))
}
