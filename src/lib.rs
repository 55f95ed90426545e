//! # backgammon-engine
//!
//! A two-player backgammon rules engine: board state, legal move
//! generation under dice constraints, hits, bar re-entry, bearing off,
//! the doubling cube, and match scoring.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the core**: the engine never prints or reads input. Move
//!    choice is injected through `MoveSelector`; state is read back through
//!    owned views.
//!
//! 2. **Validate, then apply**: every mutation checks first and then applies
//!    in full. A rejected command leaves the state exactly as it was.
//!
//! 3. **Explicit ownership**: players, scores, cube, and board belong to one
//!    `GameService` per match. No global state.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration, commands, turn state
//! - `board`: Checker placement, movement, and move generation
//! - `cube`: The doubling cube
//! - `rules`: Win classification and game results
//! - `game`: Turn engine, match scoring, move selectors
//! - `error`: `EngineError`

pub mod core;
pub mod error;
pub mod board;
pub mod cube;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandKind, DicePair, GameRng, GameRngState, Location, MatchConfig, Move, Player,
    PlayerId, PlayerMap, TurnPhase, TurnRecord,
};

pub use crate::error::{EngineError, EngineResult};

pub use crate::board::{Board, BoardSnapshot, PointView};

pub use crate::cube::DoublingCube;

pub use crate::rules::{GameEnd, GameResult, WinKind};

pub use crate::game::{
    CommandOutcome, FirstOption, GameService, GameView, MatchManager, MoveSelector,
    ScriptedSelector, TurnReport,
};
