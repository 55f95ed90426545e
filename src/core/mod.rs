//! Core engine types: players, dice, RNG, configuration, commands, turn state.
//!
//! These are the value types every other module builds on. None of them
//! hold references to the board or the match.

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use dice::{DicePair, Rolls, MAX_DIE, MIN_DIE};
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, DEFAULT_CUBE_CAP};
pub use action::{option_label, Command, CommandKind, Location, Move, TurnRecord};
pub use state::{TurnPhase, TurnState};
