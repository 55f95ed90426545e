//! Commands, moves, and turn records.
//!
//! A `Command` is what a caller asks the turn engine to do. It is a tagged
//! enum: the kind is the variant and kind-specific data rides along as the
//! payload (`Dice` carries a validated pair, `Test` a file name).
//!
//! A `Move` is one checker movement between two `Location`s. Its `Display`
//! form is the text shown to players: `"1 -> 4"`, `"BAR -> 3"`, `"22 -> OFF"`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::dice::DicePair;
use super::player::PlayerId;
use crate::error::EngineError;

/// Command discriminant, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Roll,
    Pip,
    Hint,
    Quit,
    EndGame,
    EndMatch,
    Double,
    Accept,
    Refuse,
    Dice,
    Test,
}

impl CommandKind {
    /// Every kind, in the order a help listing shows them.
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Roll,
        CommandKind::Quit,
        CommandKind::Hint,
        CommandKind::Pip,
        CommandKind::EndMatch,
        CommandKind::Double,
        CommandKind::Accept,
        CommandKind::Refuse,
        CommandKind::Dice,
        CommandKind::Test,
        CommandKind::EndGame,
    ];

    /// Keyword used in the textual form.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            CommandKind::Roll => "ROLL",
            CommandKind::Pip => "PIP",
            CommandKind::Hint => "HINT",
            CommandKind::Quit => "QUIT",
            CommandKind::EndGame => "END_GAME",
            CommandKind::EndMatch => "END_MATCH",
            CommandKind::Double => "DOUBLE",
            CommandKind::Accept => "ACCEPT",
            CommandKind::Refuse => "REFUSE",
            CommandKind::Dice => "DICE",
            CommandKind::Test => "TEST",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(word))
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A request issued to the turn engine.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::{Command, CommandKind};
///
/// let cmd: Command = "dice 3 4".parse().unwrap();
/// assert_eq!(cmd.kind(), CommandKind::Dice);
///
/// assert!("dice 0 4".parse::<Command>().is_err());
/// assert_eq!("end_game".parse::<Command>().unwrap(), Command::EndGame);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Roll,
    Pip,
    Hint,
    Quit,
    EndGame,
    EndMatch,
    Double,
    Accept,
    Refuse,
    /// Preset the next roll, used exactly once.
    Dice(DicePair),
    /// Redirect input to a script file. Handled by the caller.
    Test(String),
}

impl Command {
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Roll => CommandKind::Roll,
            Command::Pip => CommandKind::Pip,
            Command::Hint => CommandKind::Hint,
            Command::Quit => CommandKind::Quit,
            Command::EndGame => CommandKind::EndGame,
            Command::EndMatch => CommandKind::EndMatch,
            Command::Double => CommandKind::Double,
            Command::Accept => CommandKind::Accept,
            Command::Refuse => CommandKind::Refuse,
            Command::Dice(_) => CommandKind::Dice,
            Command::Test(_) => CommandKind::Test,
        }
    }
}

impl FromStr for Command {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let word = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let kind = CommandKind::from_keyword(word).ok_or_else(|| {
            EngineError::invalid_command(format!(
                "'{}'. Type 'HINT' for valid commands.",
                input.trim()
            ))
        })?;

        match kind {
            CommandKind::Dice => {
                let usage = || EngineError::invalid_command("use: dice <int> <int>");
                let [a, b] = args.as_slice() else {
                    return Err(usage());
                };
                let die1: u8 = a.parse().map_err(|_| usage())?;
                let die2: u8 = b.parse().map_err(|_| usage())?;
                Ok(Command::Dice(DicePair::new(die1, die2)?))
            }
            CommandKind::Test => match args.as_slice() {
                [file] => Ok(Command::Test((*file).to_string())),
                _ => Err(EngineError::invalid_command("use: test <filename>")),
            },
            _ if !args.is_empty() => Err(EngineError::invalid_command(format!(
                "{} takes no arguments",
                kind
            ))),
            CommandKind::Roll => Ok(Command::Roll),
            CommandKind::Pip => Ok(Command::Pip),
            CommandKind::Hint => Ok(Command::Hint),
            CommandKind::Quit => Ok(Command::Quit),
            CommandKind::EndGame => Ok(Command::EndGame),
            CommandKind::EndMatch => Ok(Command::EndMatch),
            CommandKind::Double => Ok(Command::Double),
            CommandKind::Accept => Ok(Command::Accept),
            CommandKind::Refuse => Ok(Command::Refuse),
        }
    }
}

/// Where a checker sits, from the moving player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// The moving player's bar.
    Bar,
    /// Board point 1..=24.
    Point(u8),
    /// The moving player's borne-off area.
    Off,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Bar => f.write_str("BAR"),
            Location::Point(n) => write!(f, "{}", n),
            Location::Off => f.write_str("OFF"),
        }
    }
}

/// A single checker movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Move {
    /// Point-to-point move.
    #[must_use]
    pub const fn new(from: u8, to: u8) -> Self {
        Self {
            from: Location::Point(from),
            to: Location::Point(to),
        }
    }

    /// Re-entry from the bar.
    #[must_use]
    pub const fn enter(to: u8) -> Self {
        Self {
            from: Location::Bar,
            to: Location::Point(to),
        }
    }

    /// Bear a checker off from `from`.
    #[must_use]
    pub const fn bear_off(from: u8) -> Self {
        Self {
            from: Location::Point(from),
            to: Location::Off,
        }
    }

    #[must_use]
    pub fn is_bar_entry(&self) -> bool {
        self.from == Location::Bar
    }

    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.to == Location::Off
    }

    /// Pips this move covers for `player`, measured to the bear-off
    /// boundary when bearing off and from the bar's virtual point
    /// (0 for player 1, 25 for player 2) when entering.
    #[must_use]
    pub fn distance(&self, player: PlayerId) -> u8 {
        let bar_point = 25 - player.bear_off_boundary();
        let coord = |loc: Location| match loc {
            Location::Bar => bar_point,
            Location::Point(n) => n as i8,
            Location::Off => player.bear_off_boundary(),
        };
        (coord(self.to) - coord(self.from)).unsigned_abs()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Selection label for the option at `index`: `A` through `Z`, then `AA`,
/// `AB`, and so on, always in capital letters.
#[must_use]
pub fn option_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index as u128 + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// A completed (or forfeited) turn, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who rolled.
    pub player: PlayerId,

    /// The dice rolled.
    pub dice: DicePair,

    /// Moves played, in order.
    pub moves: SmallVec<[Move; 4]>,

    /// Roll values left unplayed because no legal move remained.
    pub forfeited: SmallVec<[u8; 4]>,

    /// Turn number within the game (starts at 1).
    pub turn: u32,
}
