//! The backgammon board: checker placement, movement, and move generation.

mod layout;
mod movegen;

pub use layout::{Board, BoardSnapshot, Checker, PointView, CHECKERS_PER_PLAYER, POINT_COUNT};
pub use movegen::entry_point;
