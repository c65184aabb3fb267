//! The randomized shot sequence and its consumption cursor.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::rng::{RngOracle, SeedContext, compute_seed};

/// One chamber entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Shot {
    /// Deals damage.
    Live,
    /// Deals nothing.
    Blank,
}

/// Errors raised by chamber access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChamberError {
    #[error("no shots remain in the chamber")]
    Empty,
}

/// Shot sequence for one load cycle.
///
/// Shots are stored so that the cursor is always the last element: the
/// cursor starts at index `CHAMBER_SIZE - 1` after a load and moves toward 0
/// as shots are consumed. Consumption pops the cursor shot, so no shot can be
/// read twice. The sequence is never serialized; snapshots carry counts only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chamber {
    shots: ArrayVec<Shot, { GameConfig::CHAMBER_SIZE }>,
}

impl Chamber {
    /// Creates an empty chamber. Call [`Chamber::load`] before firing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chamber whose shots resolve in the given order.
    ///
    /// Extra shots beyond the chamber size are ignored. The live/blank
    /// invariant is not enforced, which lets tests stage exact sequences.
    pub fn from_firing_order(order: &[Shot]) -> Self {
        let shots = order
            .iter()
            .take(GameConfig::CHAMBER_SIZE)
            .rev()
            .copied()
            .collect();
        Self { shots }
    }

    /// Draws a fresh sequence, rejecting whole draws until it holds at least
    /// one live and one blank shot.
    ///
    /// Returns the number of draws it took.
    pub fn load<R>(&mut self, rng: &R, game_seed: u64, nonce: u64) -> u32
    where
        R: RngOracle + ?Sized,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            self.shots.clear();
            for index in 0..GameConfig::CHAMBER_SIZE as u32 {
                let seed = compute_seed(
                    game_seed,
                    nonce,
                    0,
                    SeedContext::ChamberShot { attempt, index },
                );
                let shot = if rng.coin(seed) {
                    Shot::Live
                } else {
                    Shot::Blank
                };
                self.shots.push(shot);
            }

            if self.live_count() > 0 && self.blank_count() > 0 {
                return attempt;
            }
        }
    }

    /// Returns the shot under the cursor without consuming it.
    pub fn peek(&self) -> Result<Shot, ChamberError> {
        self.shots.last().copied().ok_or(ChamberError::Empty)
    }

    /// Returns the shot under the cursor and moves the cursor down by one.
    pub fn consume(&mut self) -> Result<Shot, ChamberError> {
        self.shots.pop().ok_or(ChamberError::Empty)
    }

    /// Count of unconsumed shots.
    pub fn remaining(&self) -> usize {
        self.shots.len()
    }

    /// Cursor index, or `None` once the chamber is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.shots.len().checked_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Live shots among the remaining ones.
    pub fn live_count(&self) -> usize {
        self.shots.iter().filter(|shot| **shot == Shot::Live).count()
    }

    /// Blank shots among the remaining ones.
    pub fn blank_count(&self) -> usize {
        self.shots.iter().filter(|shot| **shot == Shot::Blank).count()
    }
}
