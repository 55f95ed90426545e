//! Move selection strategies.
//!
//! The turn engine never reads input itself. During a selector-driven turn
//! it hands the current options to a `MoveSelector` and applies whichever
//! index comes back. Interactive front ends prompt a human, scripted tests
//! replay a queue, and simple bots pick by rule.

use std::collections::VecDeque;

use crate::core::{Move, PlayerId};

/// Chooses one of the offered moves.
pub trait MoveSelector {
    /// Return the 0-based index of the chosen option.
    ///
    /// `options` is never empty. Out-of-range answers are rejected and the
    /// selector is asked again.
    fn select(&mut self, player: PlayerId, options: &[Move]) -> usize;
}

impl<F> MoveSelector for F
where
    F: FnMut(PlayerId, &[Move]) -> usize,
{
    fn select(&mut self, player: PlayerId, options: &[Move]) -> usize {
        self(player, options)
    }
}

/// Always takes the first option.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOption;

impl MoveSelector for FirstOption {
    fn select(&mut self, _player: PlayerId, _options: &[Move]) -> usize {
        0
    }
}

/// Replays a fixed list of indices, then falls back to the first option.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSelector {
    picks: VecDeque<usize>,
}

impl ScriptedSelector {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl MoveSelector for ScriptedSelector {
    fn select(&mut self, _player: PlayerId, _options: &[Move]) -> usize {
        self.picks.pop_front().unwrap_or(0)
    }
}
