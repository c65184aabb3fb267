//! Top-level client orchestrating the runtime and a frontend.
//!
//! ```text
//! Client (composition root)
//!   ├─→ Runtime  (fixed-rate duel loop, owns the session state)
//!   └─→ Frontend (input routing and presentation, via RuntimeHandle only)
//! ```
//!
//! The shipped frontend is [`HeadlessFrontend`], which plays the human side
//! with an [`Autopilot`] through the same input path a windowed client uses.
mod autopilot;
mod builder;
pub mod config;
mod headless;

pub use autopilot::Autopilot;
pub use builder::ClientBuilder;
pub use config::{AutopilotConfig, ClientConfig};
pub use headless::{HeadlessFrontend, SessionReport};

pub use roulette_frontend::Frontend;

use anyhow::Result;
use roulette_runtime::{Command, Runtime};
use tracing::{error, info};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. [`Client::builder`] receives an already-built runtime and frontend
/// 2. [`Client::run`] moves the runtime onto its own task
/// 3. The frontend runs until the user quits or the runtime stops
/// 4. The runtime is asked to exit and joined
pub struct Client {
    runtime: Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();
        let runtime_task = self.runtime.spawn();

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle.clone()).await;

        if !runtime_task.is_finished() {
            // Closed means the loop already returned.
            let _ = handle.try_send(Command::Exit);
        }

        match runtime_task.await {
            Ok(Ok(reason)) => info!(?reason, "runtime stopped"),
            Ok(Err(error)) => error!(%error, "runtime error"),
            Err(error) => error!(%error, "runtime task failed"),
        }

        frontend_result
    }
}
