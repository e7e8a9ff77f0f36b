mod config;
mod host;
mod timeline;

use anyhow::Result;
use clap::Parser;

use crate::config::{Cli, DemoConfig};

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,tessera_circular_progress=debug,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

pub fn desktop_main() -> Result<()> {
    init_tracing();
    let config = DemoConfig::load(Cli::parse())?;
    tracing::info!(?config, "starting circular progress session");

    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?
        .block_on(timeline::run(config))
}
