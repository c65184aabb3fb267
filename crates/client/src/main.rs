//! Versus Roulette client binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! sets up logging, builds the runtime and the headless frontend, and hands
//! both to [`Client`].
//!
//! ```bash
//! ROULETTE_SEED=7 ROULETTE_AUTOPILOT_DELAY=50 RUST_LOG=debug cargo run -p roulette-client
//! ```

use anyhow::Result;
use roulette_client::{Client, ClientConfig, HeadlessFrontend};
use roulette_runtime::Runtime;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        seed = ?config.runtime.game_seed,
        tick_rate = config.runtime.tick_rate,
        max_ticks = ?config.runtime.max_ticks,
        "starting Versus Roulette"
    );

    let runtime = Runtime::builder().config(config.runtime).build()?;
    let frontend = HeadlessFrontend::new(config.frontend, config.autopilot);

    Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?
        .run()
        .await?;

    tracing::info!("client shutdown complete");
    Ok(())
}
