//! Values returned by the turn engine for display layers.

use serde::{Deserialize, Serialize};

use crate::board::BoardSnapshot;
use crate::core::{CommandKind, DicePair, Move, PlayerId, PlayerMap, TurnPhase, TurnRecord};
use crate::rules::GameResult;

/// How the starting player was decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningRoll {
    /// The deciding die of each player.
    pub dice: PlayerMap<u8>,
    /// Tied pairs rolled before the decision.
    pub rerolls: u32,
    /// Higher die; rolls first.
    pub first: PlayerId,
}

/// Result of rolling the dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    pub player: PlayerId,
    pub dice: DicePair,
    /// Options available straight after the roll. Empty when forfeited.
    pub options: Vec<Move>,
    /// The finished turn, present when no move was possible.
    pub completed: Option<TurnRecord>,
}

impl RollReport {
    #[must_use]
    pub fn forfeited(&self) -> bool {
        self.options.is_empty()
    }
}

/// Result of playing one option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: PlayerId,
    pub mv: Move,
    /// Roll value spent.
    pub roll: u8,
    /// An opposing blot was sent to the bar.
    pub hit: bool,
    /// The finished turn, present when this move ended it.
    pub completed: Option<TurnRecord>,
    /// Set when this move won the game.
    pub result: Option<GameResult>,
}

/// Result of a selector-driven turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub record: TurnRecord,
    pub result: Option<GameResult>,
}

/// What an executed command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// ROLL played a full turn.
    Turn(TurnReport),
    /// PIP: pip counts of both players.
    Pips(PlayerMap<u32>),
    /// DICE: the next roll is fixed.
    DicePreset(DicePair),
    /// DOUBLE: `to` must now accept or refuse.
    DoubleOffered { by: PlayerId, to: PlayerId },
    /// ACCEPT: cube doubled, `owner` holds it and is on roll.
    DoubleAccepted { value: u32, owner: PlayerId },
    /// REFUSE, END_GAME, or END_MATCH finished the game.
    GameOver(GameResult),
    /// Handled by the caller (HINT, QUIT, TEST).
    Delegated(CommandKind),
}

/// Everything a display layer needs, as owned data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub board: BoardSnapshot,
    pub current_player: PlayerId,
    pub phase: TurnPhase,
    pub pending_rolls: Vec<u8>,
    pub pip_counts: PlayerMap<u32>,
    pub cube_value: u32,
    pub cube_owner: Option<PlayerId>,
    pub scores: PlayerMap<u32>,
    pub game_number: u32,
    pub game_over: bool,
    pub match_over: bool,
    /// Letter-indexed options, e.g. `"A) 1 -> 4"`.
    pub options: Vec<String>,
}
