//! Match and turn orchestration.
//!
//! - `service`: the turn engine (`GameService`)
//! - `match_manager`: scores and match termination
//! - `selector`: pluggable move choice
//! - `report`: owned result values for display layers

pub mod match_manager;
pub mod report;
pub mod selector;
pub mod service;

pub use match_manager::{MatchManager, DRAW};
pub use report::{CommandOutcome, GameView, MoveReport, OpeningRoll, RollReport, TurnReport};
pub use selector::{FirstOption, MoveSelector, ScriptedSelector};
pub use service::GameService;
