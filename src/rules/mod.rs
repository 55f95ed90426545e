//! Scoring rules.
//!
//! Decides who has won a game and how many points the win is worth:
//! - Single, gammon, and backgammon classification
//! - Cube value multiplied by the win kind
//!
//! The board knows nothing about scoring; the turn engine calls into this
//! module after every move.

pub mod scoring;

pub use scoring::{bore_off_winner, classify_win, GameEnd, GameResult, WinKind};
