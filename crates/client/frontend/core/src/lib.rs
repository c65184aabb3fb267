//! Cross-frontend primitives for presenting the duel.
//!
//! Houses input routing, the selection grid, message logging, event handling,
//! and view-model types that the headless client and any graphical client can
//! reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod grid;
pub mod input;
pub mod message;
pub mod screen;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, MessageFilter};
pub use event::{EventConsumer, EventImpact, MessageFeed};
pub use frontend::Frontend;
pub use grid::{EdgeBehavior, SelectableGrid};
pub use input::{Direction, InputCommand};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use screen::{GameplayOption, Intent, MenuOption, Screen, ScreenRouter};
pub use view_model::{SideView, UiFrame};
