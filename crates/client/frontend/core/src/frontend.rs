//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use roulette_runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the duel only through a [`RuntimeHandle`]: they subscribe
/// to bus topics, read the latest snapshot, and queue commands produced by
/// their [`ScreenRouter`](crate::ScreenRouter). They never own the runtime.
///
/// ```no_run
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use roulette_frontend::Frontend;
/// use roulette_runtime::{RuntimeHandle, Topic};
///
/// struct Logger;
///
/// #[async_trait]
/// impl Frontend for Logger {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut rounds = handle.subscribe(Topic::Round);
///         while let Ok(event) = rounds.recv().await {
///             println!("{event:?}");
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
