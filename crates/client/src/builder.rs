//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use roulette_runtime::Runtime;

/// Builder for constructing a [`Client`].
///
/// Both the runtime and the frontend are required; `build()` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend receives a `RuntimeHandle` when the client runs.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("client needs a runtime; call .runtime() before .build()")?;

        let frontend = self
            .frontend
            .context("client needs a frontend; call .frontend() before .build()")?;

        Ok(Client { runtime, frontend })
    }
}
