//! Frontend configuration structures and loaders.
//!
//! UI settings shared by every presentation layer, separate from the runtime
//! configuration that drives the simulation.

use std::env;

use bitflags::bitflags;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROULETTE_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `ROULETTE_MESSAGE_LIMIT` - Messages included in each frame (default: 8)
    /// - `ROULETTE_SHOW_PHASE_MESSAGES` - Log every turn hand-over (default: false)
    /// - `ROULETTE_SHOW_ITEM_MESSAGES` - Log item grants and uses (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("ROULETTE_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(limit) = read_env::<usize>("ROULETTE_MESSAGE_LIMIT") {
            config.messages.frame_limit = limit;
        }
        if let Some(show) = read_env_bool("ROULETTE_SHOW_PHASE_MESSAGES") {
            config.messages.filter.set(MessageFilter::PHASES, show);
        }
        if let Some(show) = read_env_bool("ROULETTE_SHOW_ITEM_MESSAGES") {
            config.messages.filter.set(MessageFilter::ITEMS, show);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub frame_limit: usize,
    pub filter: MessageFilter,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            frame_limit: 8,
            filter: MessageFilter::default(),
        }
    }
}

bitflags! {
    /// Which runtime event categories produce log messages.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MessageFilter: u8 {
        /// Shots and the hits they cause.
        const SHOTS  = 1 << 0;
        const ITEMS  = 1 << 1;
        /// Turn hand-overs. Noisy; off by default.
        const PHASES = 1 << 2;
        /// Round starts and results.
        const ROUNDS = 1 << 3;
    }
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self::SHOTS | Self::ITEMS | Self::ROUNDS
    }
}

pub(crate) fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

pub(crate) fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_messages_are_opt_in() {
        let filter = MessageFilter::default();
        assert!(filter.contains(MessageFilter::SHOTS | MessageFilter::ROUNDS));
        assert!(filter.contains(MessageFilter::ITEMS));
        assert!(!filter.contains(MessageFilter::PHASES));
    }

    #[test]
    fn unset_variables_fall_back() {
        assert_eq!(read_env::<usize>("ROULETTE_TEST_SURELY_UNSET"), None);
        assert_eq!(read_env_bool("ROULETTE_TEST_SURELY_UNSET"), None);
    }
}
