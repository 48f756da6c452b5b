//! PetMatch - find an adoptable pet through the Petfinder directory
//!
//! Main entry point for the web server.

use std::sync::Arc;

use anyhow::Context;
use petmatch_infra::config;
use petmatch_infra::observability::{init_tracing, LogFormat};
use petmatch_lib::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::from_env());

    let config = config::load().context("failed to load configuration")?;
    tracing::info!(
        bind_address = %config.server.bind_address,
        port = config.server.port,
        "PetMatch starting..."
    );

    let ctx = AppContext::new(config).context("failed to initialize application context")?;
    petmatch_lib::serve(Arc::new(ctx)).await.context("server error")?;

    Ok(())
}
