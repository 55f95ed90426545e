//! Seats, per-seat storage, and named players.
//!
//! ## PlayerId
//!
//! Seat identifier for the two sides of a backgammon game. `PlayerId::ONE`
//! moves from point 1 towards point 24, `PlayerId::TWO` moves the other way.
//!
//! ## PlayerMap
//!
//! A value for each seat, stored inline and indexed by `PlayerId`.
//! Scores, bars, off areas and pip counts all use it.
//!
//! ## Player
//!
//! A named participant sitting in one seat. Owned by the match, never global.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

/// Seat identifier: `PlayerId(0)` is player 1, `PlayerId(1)` is player 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1: moves 1 → 24, home board 19–24, bears off past 24.
    pub const ONE: PlayerId = PlayerId(0);

    /// Player 2: moves 24 → 1, home board 1–6, bears off past 1.
    pub const TWO: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Signed step applied to a point index per pip moved.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self.0 {
            0 => 1,
            _ => -1,
        }
    }

    /// Points making up this player's home quadrant.
    #[must_use]
    pub const fn home_board(self) -> RangeInclusive<u8> {
        match self.0 {
            0 => 19..=24,
            _ => 1..=6,
        }
    }

    /// Points this player re-enters on from the bar (the opponent's home).
    #[must_use]
    pub const fn entry_board(self) -> RangeInclusive<u8> {
        self.opponent().home_board()
    }

    /// Computed targets at or beyond this value leave the board.
    ///
    /// Player 1 bears off at `>= 25`, player 2 at `<= 0`.
    #[must_use]
    pub const fn bear_off_boundary(self) -> i8 {
        match self.0 {
            0 => 25,
            _ => 0,
        }
    }

    /// Iterate over both seats, player 1 first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One `T` per seat.
///
/// ## Example
///
/// ```
/// use backgammon_engine::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerId::TWO] += 2;
///
/// assert_eq!(score[PlayerId::ONE], 0);
/// assert_eq!(score[PlayerId::TWO], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Build both entries from `factory`, player 1 first.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Both seats start with `value`.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Entries with their seat, player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A named participant in a match.
///
/// Equality compares both the seat and the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    /// Create a player sitting in `id`.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
