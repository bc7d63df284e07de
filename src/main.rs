use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use log::info;
use medboard::config::AppConfig;
use medboard::http::{self, AppState};
use medboard::loader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_args(std::env::args().skip(1));

    // Setup logging; --debug raises the default filter
    let default_filter = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    info!("Starting medboard: {config}");

    let start = Instant::now();
    let records = loader::load_dataset(&config.data_path, config.schema_infer_rows)
        .with_context(|| format!("loading dataset from {}", config.data_path.display()))?;

    let state = AppState::new(&records);
    info!(
        "Built 4 dashboard pages from {} records in {:?}",
        records.len(),
        start.elapsed()
    );

    http::serve(config.bind_addr, Arc::new(state))
        .await
        .context("serving dashboards")?;
    Ok(())
}
