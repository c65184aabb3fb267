//! High-level runtime orchestrator.
//!
//! The runtime owns the session state, the opponent policy, and the command,
//! snapshot, and event channels. [`Runtime::tick`] advances the simulation by
//! exactly one fixed step; [`Runtime::run`] drives it from a tokio interval.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use roulette_core::{
    Action, ActionError, ErrorSeverity, GameConfig, GameEngine, GameError, GameEvent, GameState,
    PcgRng, RngOracle, RoundPhase, Side, Snapshot, WinCheck,
};

use crate::api::{Command, Result, RuntimeError, RuntimeHandle};
use crate::events::{EventBus, extract_events};
use crate::providers::{ThresholdPolicy, TurnPolicy};

/// Runtime configuration shared across the orchestrator and its channels.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Fixed simulation rate in Hz.
    pub tick_rate: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Session seed. `None` draws a random one at build time.
    pub game_seed: Option<u64>,
    /// Stop [`Runtime::run`] after this many ticks.
    pub max_ticks: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_RATE: u32 = 60;

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            tick_rate: Self::DEFAULT_TICK_RATE,
            event_buffer_size: 100,
            command_buffer_size: 32,
            game_seed: None,
            max_ticks: None,
        }
    }
}

/// What one call to [`Runtime::tick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub phase: RoundPhase,
    pub win: WinCheck,
    pub events: Vec<GameEvent>,
}

/// Why [`Runtime::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    ExitRequested,
    TickLimit,
}

/// Main runtime that orchestrates the duel simulation.
///
/// Design: Runtime owns the authoritative [`GameState`] and is the only
/// place that constructs a [`GameEngine`]. [`RuntimeHandle`] provides a
/// cloneable façade for clients.
pub struct Runtime {
    config: RuntimeConfig,
    state: GameState,
    rng: Box<dyn RngOracle>,
    policy: Box<dyn TurnPolicy>,

    handle: RuntimeHandle,
    command_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<Snapshot>,
    event_bus: EventBus,

    pending: VecDeque<Action>,
    tick: u64,
    exit_requested: bool,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Applies queued commands: restarts and exits take effect now, human
    /// actions wait for the input step of the next tick.
    pub fn drain_commands(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.apply_command(command);
        }
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::Act(kind) => self.pending.push_back(Action::new(Side::Player, kind)),
            Command::Restart => {
                info!(tick = self.tick, "restarting session");
                self.pending.clear();
                self.policy.reset();
                let mut engine = GameEngine::new(&mut self.state);
                engine.restart();
                let events = engine.into_events();
                self.publish(&events);
            }
            Command::Exit => {
                info!(tick = self.tick, "exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Advances the simulation by one fixed step.
    ///
    /// Order within a tick: pending round start, win detection, human input
    /// or opponent policy, reveal countdown, then publication.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let tick = self.tick;
        let mut engine = GameEngine::new(&mut self.state);

        if engine.state().phase() == RoundPhase::RoundStart {
            engine.begin_round(self.rng.as_ref());
            let state = engine.state();
            info!(
                tick,
                round = state.turn.round,
                live = state.chamber.live_count(),
                blank = state.chamber.blank_count(),
                "round started"
            );
        }

        let win = engine.check_win();
        if let WinCheck::Decided { loser } = win {
            info!(tick, %loser, winner = %loser.other(), "round over");
        }

        let policy_turn = engine.state().phase() == RoundPhase::OpponentTurn;
        let actions: Vec<Action> = match engine.state().phase() {
            RoundPhase::PlayerTurn => self.pending.drain(..).collect(),
            RoundPhase::OpponentTurn => {
                if !self.pending.is_empty() {
                    debug!(tick, dropped = self.pending.len(), "input ignored outside player turn");
                    self.pending.clear();
                }
                self.policy.on_tick(engine.state())
            }
            RoundPhase::RoundStart | RoundPhase::RoundOver => {
                self.pending.clear();
                Vec::new()
            }
        };

        for action in actions {
            apply_action(&mut engine, tick, action);
        }
        if policy_turn {
            if let Some(action) = self.policy.follow_up(engine.state()) {
                apply_action(&mut engine, tick, action);
            }
        }

        engine.tick_reveal();

        if engine.state().phase() != RoundPhase::OpponentTurn {
            self.policy.reset();
        }

        let events = engine.into_events();
        self.publish(&events);

        TickReport {
            tick,
            phase: self.state.phase(),
            win,
            events,
        }
    }

    fn publish(&self, events: &[GameEvent]) {
        for event in extract_events(self.tick, events) {
            self.event_bus.publish(event);
        }
        self.snapshot_tx.send_replace(self.state.snapshot());
    }

    /// Runs the fixed-rate loop until an exit command or the tick limit.
    ///
    /// Commands are drained before every tick; the exit flag is checked once
    /// per tick and never interrupts one.
    pub async fn run(&mut self) -> Result<StopReason> {
        let mut interval = tokio::time::interval(self.config.tick_period());
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

        info!(
            seed = self.state.game_seed,
            tick_rate = self.config.tick_rate,
            "runtime loop started"
        );

        loop {
            interval.tick().await;
            self.drain_commands();

            if self.exit_requested {
                return Ok(StopReason::ExitRequested);
            }

            self.tick();

            if self.config.max_ticks.is_some_and(|max| self.tick >= max) {
                info!(ticks = self.tick, "tick limit reached");
                return Ok(StopReason::TickLimit);
            }
        }
    }

    /// Moves the runtime onto its own task.
    pub fn spawn(mut self) -> tokio::task::JoinHandle<Result<StopReason>> {
        tokio::spawn(async move { self.run().await })
    }
}

fn apply_action(engine: &mut GameEngine<'_>, tick: u64, action: Action) {
    match engine.execute(action) {
        Ok(outcome) => debug!(tick, ?action, ?outcome, "action applied"),
        Err(error) => log_rejection(tick, action, &error),
    }
}

fn log_rejection(tick: u64, action: Action, error: &ActionError) {
    debug_assert!(
        !error.severity().is_internal(),
        "engine invariant violated: {error}"
    );
    match error.severity() {
        ErrorSeverity::Internal => {
            error!(tick, ?action, code = error.error_code(), %error, "engine invariant violated");
        }
        ErrorSeverity::Validation | ErrorSeverity::Recoverable => {
            debug!(tick, ?action, code = error.error_code(), %error, "action rejected");
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    rng: Option<Box<dyn RngOracle>>,
    policy: Option<Box<dyn TurnPolicy>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            rng: None,
            policy: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the session seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.game_seed = Some(seed);
        self
    }

    /// Provide initial game state. Its seed and config take precedence over
    /// the runtime config.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the default PCG oracle.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Replace the default [`ThresholdPolicy`].
    pub fn policy(mut self, policy: impl TurnPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let config = self.config;
        if config.tick_rate == 0 {
            return Err(RuntimeError::InvalidTickRate);
        }
        if config.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidBufferSize { name: "event" });
        }
        if config.command_buffer_size == 0 {
            return Err(RuntimeError::InvalidBufferSize { name: "command" });
        }

        let state = self.state.unwrap_or_else(|| {
            let seed = config.game_seed.unwrap_or_else(rand::random);
            GameState::new(seed, config.game_config.clone())
        });

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, snapshot_rx, event_bus.clone());

        info!(seed = state.game_seed, "runtime built");

        Ok(Runtime {
            config,
            state,
            rng: self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            policy: self
                .policy
                .unwrap_or_else(|| Box::new(ThresholdPolicy::new())),
            handle,
            command_rx,
            snapshot_tx,
            event_bus,
            pending: VecDeque::new(),
            tick: 0,
            exit_requested: false,
        })
    }
}
