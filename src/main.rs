//! Support chat server.
//!
//! Entry point for the customer-support chat widget.

use std::sync::Arc;

use mimalloc::MiMalloc;
use support_chat::config::AppConfig;
use support_chat::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenvy::dotenv();

    telemetry::init();

    let config = Arc::new(AppConfig::load()?);

    server::start_server(config).await
}
