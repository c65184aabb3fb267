//! Common error infrastructure for roulette-core.
//!
//! Domain errors ([`ChamberError`], [`InventoryError`]) live next to the state
//! they guard; [`ActionError`] is what the engine surfaces to the runtime.
//! None of them is fatal: the runtime swallows every one of them at the
//! boundary, using [`ErrorSeverity`] to decide how loudly to log.
//!
//! [`ChamberError`]: crate::state::ChamberError
//! [`InventoryError`]: crate::state::InventoryError

use crate::state::{ChamberError, InventoryError, RoundPhase, Side};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the operation is skipped and play continues normally
/// - **Validation**: invalid input, rejected as a silent no-op
/// - **Internal**: unreachable state reached; indicates a lifecycle bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Skipped silently. Example: item grant with a full inventory.
    Recoverable,

    /// Invalid input. Examples: empty slot, acting out of turn.
    Validation,

    /// Unexpected state inconsistency. Example: firing an empty chamber.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all roulette-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors surfaced by [`GameEngine`](crate::engine::GameEngine) actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Peek/consume attempted with zero shots left.
    #[error("chamber is empty")]
    EmptyChamber,

    /// Item use requested on an unoccupied slot.
    #[error("inventory slot {slot} is empty")]
    EmptySlot { slot: usize },

    /// Slot index outside the fixed inventory.
    #[error("inventory slot {slot} does not exist")]
    InvalidSlot { slot: usize },

    /// Action attempted while the side may not act.
    #[error("{side} cannot act during {phase}")]
    NotYourTurn { side: Side, phase: RoundPhase },

    /// Item grant with no empty slot left.
    #[error("inventory is full")]
    InventoryFull,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyChamber => ErrorSeverity::Internal,
            Self::EmptySlot { .. } | Self::InvalidSlot { .. } | Self::NotYourTurn { .. } => {
                ErrorSeverity::Validation
            }
            Self::InventoryFull => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyChamber => "EMPTY_CHAMBER",
            Self::EmptySlot { .. } => "EMPTY_SLOT",
            Self::InvalidSlot { .. } => "INVALID_SLOT",
            Self::NotYourTurn { .. } => "NOT_YOUR_TURN",
            Self::InventoryFull => "INVENTORY_FULL",
        }
    }
}

impl From<ChamberError> for ActionError {
    fn from(error: ChamberError) -> Self {
        match error {
            ChamberError::Empty => Self::EmptyChamber,
        }
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        match error {
            InventoryError::EmptySlot { slot } => Self::EmptySlot { slot },
            InventoryError::InvalidSlot { slot } => Self::InvalidSlot { slot },
            InventoryError::Full => Self::InventoryFull,
        }
    }
}

impl GameError for ChamberError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "EMPTY_CHAMBER"
    }
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full => ErrorSeverity::Recoverable,
            Self::EmptySlot { .. } | Self::InvalidSlot { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full => "INVENTORY_FULL",
            Self::EmptySlot { .. } => "EMPTY_SLOT",
            Self::InvalidSlot { .. } => "INVALID_SLOT",
        }
    }
}
