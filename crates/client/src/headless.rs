//! Terminal-free frontend driven by the [`Autopilot`].
//!
//! Renders nothing; duel messages go to the log and the final frame is kept
//! for inspection once the loop ends.
use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use roulette_core::Side;
use roulette_frontend::{
    EventConsumer, Frontend, FrontendConfig, Intent, MessageFeed, ScreenRouter, UiFrame,
};
use roulette_runtime::{Event, RoundEvent, RuntimeError, RuntimeHandle, Topic};

use crate::autopilot::Autopilot;
use crate::config::AutopilotConfig;

/// What a finished headless run saw.
#[derive(Clone, Debug, Default)]
pub struct SessionReport {
    pub inputs: u64,
    pub commands: u64,
    pub events: u64,
    pub wins: u32,
    pub losses: u32,
    pub final_frame: Option<UiFrame>,
}

pub struct HeadlessFrontend {
    config: FrontendConfig,
    input_delay: Duration,
    router: ScreenRouter,
    feed: MessageFeed,
    autopilot: Autopilot,
    report: SessionReport,
}

enum Flow {
    Continue,
    Stop,
}

impl HeadlessFrontend {
    pub fn new(config: FrontendConfig, autopilot: AutopilotConfig) -> Self {
        Self {
            feed: MessageFeed::new(&config.messages),
            config,
            input_delay: autopilot.input_delay,
            router: ScreenRouter::new(),
            autopilot: Autopilot::new(autopilot.sessions),
            report: SessionReport::default(),
        }
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    fn consume(&mut self, received: Result<Event, RecvError>) -> Flow {
        let event = match received {
            Ok(event) => event,
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "event stream lagged");
                return Flow::Continue;
            }
            Err(RecvError::Closed) => return Flow::Stop,
        };

        self.report.events += 1;
        if let Event::Round(RoundEvent::Over { loser, .. }) = event {
            if loser == Side::Opponent {
                self.report.wins += 1;
            } else {
                self.report.losses += 1;
            }
        }

        let before = self.feed.total();
        self.feed.on_event(&event);
        if self.feed.total() > before {
            if let Some(entry) = self.feed.message_log().recent(1).next() {
                info!(tick = entry.tick, level = ?entry.level, "{}", entry.text);
            }
        }
        Flow::Continue
    }

    /// Lets the autopilot press one key and forwards any resulting intent.
    async fn step(&mut self, handle: &RuntimeHandle) -> Result<Flow> {
        let snapshot = handle.snapshot();
        self.router.observe(&snapshot);

        let Some(input) = self.autopilot.next_input(&self.router, &snapshot) else {
            return Ok(Flow::Continue);
        };
        self.report.inputs += 1;

        let Some(intent) = self.router.handle(input, snapshot.phase) else {
            return Ok(Flow::Continue);
        };
        debug!(?input, ?intent, screen = ?self.router.screen(), "forwarding intent");

        match handle.send(intent.command()).await {
            Ok(()) => self.report.commands += 1,
            Err(RuntimeError::CommandChannelClosed) => return Ok(Flow::Stop),
            Err(error) => return Err(error).context("failed to queue command"),
        }

        Ok(match intent {
            Intent::Exit => Flow::Stop,
            Intent::StartSession | Intent::Act(_) => Flow::Continue,
        })
    }
}

#[async_trait]
impl Frontend for HeadlessFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let mut animation = handle.subscribe(Topic::Animation);
        let mut audio = handle.subscribe(Topic::Audio);
        let mut rounds = handle.subscribe(Topic::Round);
        let mut snapshots = handle.snapshots();

        let mut pacing = tokio::time::interval(self.input_delay);
        pacing.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(delay = ?self.input_delay, "headless frontend started");

        loop {
            let flow = tokio::select! {
                changed = snapshots.changed() => match changed {
                    Ok(()) => {
                        let snapshot = snapshots.borrow_and_update().clone();
                        if self.router.observe(&snapshot) {
                            info!(winner = ?snapshot.winner(), "game over");
                        }
                        Flow::Continue
                    }
                    Err(_) => {
                        info!("runtime stopped publishing");
                        Flow::Stop
                    }
                },
                received = animation.recv() => self.consume(received),
                received = audio.recv() => self.consume(received),
                received = rounds.recv() => self.consume(received),
                _ = pacing.tick() => self.step(&handle).await?,
            };

            if let Flow::Stop = flow {
                break;
            }
        }

        let frame = UiFrame::from_snapshot(
            &handle.snapshot(),
            &self.router,
            self.feed.message_log(),
            self.config.messages.frame_limit,
        );
        info!(
            wins = self.report.wins,
            losses = self.report.losses,
            inputs = self.report.inputs,
            "headless frontend finished"
        );
        self.report.final_frame = Some(frame);
        Ok(())
    }
}
