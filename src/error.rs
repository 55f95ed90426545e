//! Engine error types.
//!
//! Every error is recoverable at the command loop: the caller reports it,
//! re-prompts, and the engine state is exactly what it was before the call.

use derive_more::{Display, Error};

/// Errors returned by the board, the cube, and the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Unparseable command, or a command issued out of context
    /// (e.g. ACCEPT with no pending offer).
    #[display("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// A move outside the current option set, or a direct board call
    /// with an illegal from/to combination.
    #[display("Illegal move: {reason}")]
    IllegalMove { reason: String },

    /// Dice values outside 1..=6.
    #[display("Dice values must be between 1 and 6 (got {die1} and {die2})")]
    InvalidDice { die1: u8, die2: u8 },

    /// Rejected match configuration.
    #[display("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl EngineError {
    pub(crate) fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub(crate) fn illegal_move(reason: impl Into<String>) -> Self {
        Self::IllegalMove {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
