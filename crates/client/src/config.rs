//! Client configuration loaded from the process environment.
use std::env;
use std::time::Duration;

use roulette_frontend::FrontendConfig;
use roulette_runtime::RuntimeConfig;

/// Everything the binary needs to assemble a session.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub frontend: FrontendConfig,
    pub autopilot: AutopilotConfig,
}

/// Pacing of the scripted input source that plays the human side.
#[derive(Clone, Debug)]
pub struct AutopilotConfig {
    /// Pause between two inputs.
    pub input_delay: Duration,
    /// Sessions to play before selecting Exit.
    pub sessions: u32,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            input_delay: Duration::from_millis(250),
            sessions: 1,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROULETTE_SEED` - Session seed (default: random)
    /// - `ROULETTE_TICK_RATE` - Simulation rate in Hz (default: 60)
    /// - `ROULETTE_MAX_TICKS` - Stop after this many ticks (default: unlimited)
    /// - `ROULETTE_EVENT_BUFFER` - Per-topic event buffer (default: 100)
    /// - `ROULETTE_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `ROULETTE_AUTOPILOT_DELAY` - Milliseconds between inputs (default: 250)
    /// - `ROULETTE_AUTOPILOT_SESSIONS` - Sessions to play (default: 1)
    ///
    /// Frontend variables are read by [`FrontendConfig::from_env`].
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());
        config.frontend = FrontendConfig::from_env();
        config
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary key lookup.
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse::<u64>(lookup("ROULETTE_SEED")) {
            config.runtime.game_seed = Some(seed);
        }
        if let Some(rate) = parse::<u32>(lookup("ROULETTE_TICK_RATE")) {
            config.runtime.tick_rate = rate.max(1);
        }
        if let Some(max) = parse::<u64>(lookup("ROULETTE_MAX_TICKS")) {
            config.runtime.max_ticks = Some(max);
        }
        if let Some(size) = parse::<usize>(lookup("ROULETTE_EVENT_BUFFER")) {
            config.runtime.event_buffer_size = size.max(1);
        }
        if let Some(size) = parse::<usize>(lookup("ROULETTE_COMMAND_BUFFER")) {
            config.runtime.command_buffer_size = size.max(1);
        }
        if let Some(millis) = parse::<u64>(lookup("ROULETTE_AUTOPILOT_DELAY")) {
            config.autopilot.input_delay = Duration::from_millis(millis.max(1));
        }
        if let Some(sessions) = parse::<u32>(lookup("ROULETTE_AUTOPILOT_SESSIONS")) {
            config.autopilot.sessions = sessions;
        }

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
