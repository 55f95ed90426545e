//! Per-game turn state.
//!
//! ## TurnPhase
//!
//! Where the turn state machine currently stands:
//!
//! ```text
//! AwaitingRoll ──roll──▶ SelectingMove ──rolls spent / no move──▶ AwaitingRoll (other player)
//!      │                      │
//!      │ double               └──last checker off──▶ GameOver
//!      ▼
//! DoubleOffered ──accept──▶ AwaitingRoll (acceptor)
//!      └──refuse──▶ GameOver
//! ```
//!
//! ## TurnState
//!
//! Current player, phase, the unused roll values, and the dice last rolled.
//! Created fresh for every game.

use serde::{Deserialize, Serialize};

use super::dice::{DicePair, Rolls};
use super::player::PlayerId;

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current player may roll, offer a double, or query.
    AwaitingRoll,
    /// Dice are rolled; the current player must pick from the options.
    SelectingMove,
    /// A double is on the table; the opponent of `offered_by` must answer.
    DoubleOffered { offered_by: PlayerId },
    /// The game has a result; a new game must be started.
    GameOver,
}

/// Turn state for the game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player whose turn it is.
    pub current: PlayerId,

    /// Current phase.
    pub phase: TurnPhase,

    /// Roll values not yet used this turn.
    pub pending_rolls: Rolls,

    /// Dice rolled this turn, if any.
    pub dice: Option<DicePair>,

    /// Turn number within the game (starts at 1).
    pub turn_number: u32,
}

impl TurnState {
    /// Fresh state with `first` to roll.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            current: first,
            phase: TurnPhase::AwaitingRoll,
            pending_rolls: Rolls::new(),
            dice: None,
            turn_number: 1,
        }
    }

    /// State for a match that has no game running yet.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            phase: TurnPhase::GameOver,
            ..Self::new(PlayerId::ONE)
        }
    }

    /// Player who must answer a pending double, if any.
    #[must_use]
    pub fn player_to_respond(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::DoubleOffered { offered_by } => Some(offered_by.opponent()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Hand the turn to the other player.
    pub fn pass_turn(&mut self) {
        self.current = self.current.opponent();
        self.phase = TurnPhase::AwaitingRoll;
        self.pending_rolls.clear();
        self.dice = None;
        self.turn_number += 1;
    }

    /// Remove the roll consumed by a move covering `distance` pips.
    ///
    /// An exact match is used when present, otherwise the smallest roll that
    /// covers the distance (bearing off from below the roll's point).
    /// Returns the roll removed.
    pub fn consume_roll(&mut self, distance: u8) -> Option<u8> {
        let idx = self
            .pending_rolls
            .iter()
            .position(|&r| r == distance)
            .or_else(|| {
                self.pending_rolls
                    .iter()
                    .enumerate()
                    .filter(|(_, &r)| r >= distance)
                    .min_by_key(|(_, &r)| r)
                    .map(|(i, _)| i)
            })?;
        Some(self.pending_rolls.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_new_and_idle() {
        let state = TurnState::new(PlayerId::TWO);
        assert_eq!(state.current, PlayerId::TWO);
        assert_eq!(state.phase, TurnPhase::AwaitingRoll);
        assert!(!state.is_game_over());

        assert!(TurnState::idle().is_game_over());
    }

    #[test]
    fn test_pass_turn() {
        let mut state = TurnState::new(PlayerId::ONE);
        state.phase = TurnPhase::SelectingMove;
        state.pending_rolls = smallvec![3];

        state.pass_turn();

        assert_eq!(state.current, PlayerId::TWO);
        assert_eq!(state.phase, TurnPhase::AwaitingRoll);
        assert!(state.pending_rolls.is_empty());
        assert_eq!(state.turn_number, 2);
    }

    #[test]
    fn test_consume_roll_exact_then_smallest_covering() {
        let mut state = TurnState::new(PlayerId::ONE);
        state.pending_rolls = smallvec![6, 2, 4];

        assert_eq!(state.consume_roll(4), Some(4));
        assert_eq!(state.pending_rolls.as_slice(), &[6, 2]);

        // No exact 1: the smallest covering roll (2) goes.
        assert_eq!(state.consume_roll(1), Some(2));
        assert_eq!(state.pending_rolls.as_slice(), &[6]);

        assert_eq!(state.consume_roll(7), None);
        assert_eq!(state.pending_rolls.as_slice(), &[6]);
    }

    #[test]
    fn test_player_to_respond() {
        let mut state = TurnState::new(PlayerId::ONE);
        assert_eq!(state.player_to_respond(), None);

        state.phase = TurnPhase::DoubleOffered {
            offered_by: PlayerId::ONE,
        };
        assert_eq!(state.player_to_respond(), Some(PlayerId::TWO));
    }
}
