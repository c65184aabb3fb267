//! Action sources for the non-human side.

pub mod ai;

pub use ai::{PolicyStages, ThresholdPolicy, TurnPolicy};
