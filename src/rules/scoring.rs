//! Game results and win classification.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CHECKERS_PER_PLAYER};
use crate::core::PlayerId;

/// How decisive a won game was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    /// Loser has borne off at least one checker.
    Single,
    /// Loser has borne off nothing.
    Gammon,
    /// Loser has borne off nothing and still has a checker on the bar or in
    /// the winner's home board.
    Backgammon,
}

impl WinKind {
    /// Multiplier applied to the cube value.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            WinKind::Single => 1,
            WinKind::Gammon => 2,
            WinKind::Backgammon => 3,
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    /// The winner bore off all checkers.
    BoreOff(WinKind),
    /// The opponent of the winner refused a double.
    DoubleRefused,
    /// Ended early by END_GAME or END_MATCH.
    Stopped,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Player awarded the points. `None` for an early stop on tied scores.
    pub winner: Option<PlayerId>,
    pub end: GameEnd,
    /// Points added to the winner's score.
    pub points: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }
}

/// Player who has borne off every checker, if any.
#[must_use]
pub fn bore_off_winner(board: &Board) -> Option<PlayerId> {
    PlayerId::both().find(|&p| board.off_count(p) == CHECKERS_PER_PLAYER)
}

/// Classify `winner`'s win from the loser's position.
#[must_use]
pub fn classify_win(board: &Board, winner: PlayerId) -> WinKind {
    let loser = winner.opponent();
    if board.off_count(loser) > 0 {
        WinKind::Single
    } else if board.bar_count(loser) > 0
        || board.has_checker_in_range(loser, winner.home_board())
    {
        WinKind::Backgammon
    } else {
        WinKind::Gammon
    }
}
