//! Checker placement and movement.
//!
//! The `Board` owns every checker of both players: 24 point stacks, a bar
//! per player, and an off area per player. All mutation goes through its
//! methods, which validate first and then apply in full, so a rejected call
//! leaves the board exactly as it was.
//!
//! ## Usage
//!
//! ```
//! use backgammon_engine::board::Board;
//! use backgammon_engine::core::PlayerId;
//!
//! let mut board = Board::new();
//! assert_eq!(board.point(1).count, 2);
//!
//! // Player 1 runs a back checker 1 -> 4.
//! let hit = board.make_move(PlayerId::ONE, 1, 4).unwrap();
//! assert!(!hit);
//! assert_eq!(board.point(4).owner, Some(PlayerId::ONE));
//!
//! // Point 6 holds five of player 2's checkers: blocked.
//! assert!(board.make_move(PlayerId::ONE, 1, 6).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

use crate::core::{Location, Move, PlayerId, PlayerMap};
use crate::error::{EngineError, EngineResult};

/// Checkers each player owns.
pub const CHECKERS_PER_PLAYER: u8 = 15;

/// Number of board points.
pub const POINT_COUNT: u8 = 24;

/// A single checker. Its owner never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    owner: PlayerId,
}

impl Checker {
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self { owner }
    }

    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }
}

/// Read-only view of one point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointView {
    /// Owner of the checkers on the point, `None` when empty.
    pub owner: Option<PlayerId>,
    /// Number of checkers on the point.
    pub count: u8,
}

/// Owned copy of the whole board for display layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Points 1..=24, index 0 is point 1.
    pub points: Vec<PointView>,
    /// Checkers waiting on each player's bar.
    pub bar: PlayerMap<u8>,
    /// Checkers each player has borne off.
    pub off: PlayerMap<u8>,
}

/// Authoritative checker placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Index 0 is point 1.
    points: [Vec<Checker>; POINT_COUNT as usize],
    bar: PlayerMap<Vec<Checker>>,
    off: PlayerMap<Vec<Checker>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_point(PlayerId::ONE, 1, 2)
            .with_point(PlayerId::ONE, 12, 5)
            .with_point(PlayerId::ONE, 17, 3)
            .with_point(PlayerId::ONE, 19, 5)
            .with_point(PlayerId::TWO, 6, 5)
            .with_point(PlayerId::TWO, 8, 3)
            .with_point(PlayerId::TWO, 13, 5)
            .with_point(PlayerId::TWO, 24, 2)
    }

    /// A board with no checkers anywhere, for building custom positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: std::array::from_fn(|_| Vec::new()),
            bar: PlayerMap::default(),
            off: PlayerMap::default(),
        }
    }

    /// Add `count` of `player`'s checkers to `point`.
    ///
    /// Panics if the point is out of range or held by the opponent; see
    /// [`Board::try_with_point`] for the fallible form.
    #[must_use]
    pub fn with_point(self, player: PlayerId, point: u8, count: u8) -> Self {
        match self.try_with_point(player, point, count) {
            Ok(board) => board,
            Err(err) => panic!("{}", err),
        }
    }

    /// Add `count` of `player`'s checkers to `point`, rejecting points off
    /// the board or held by the opponent.
    pub fn try_with_point(mut self, player: PlayerId, point: u8, count: u8) -> EngineResult<Self> {
        if !Self::on_board(point) {
            return Err(EngineError::illegal_move(format!("point {} is off the board", point)));
        }
        let stack = &mut self.points[Self::slot(point)];
        if stack.first().is_some_and(|c| c.owner != player) {
            return Err(EngineError::illegal_move(format!(
                "point {} is held by the opponent",
                point
            )));
        }
        stack.extend((0..count).map(|_| Checker::new(player)));
        Ok(self)
    }

    /// Put `count` of `player`'s checkers on the bar.
    #[must_use]
    pub fn with_bar(mut self, player: PlayerId, count: u8) -> Self {
        self.bar[player].extend((0..count).map(|_| Checker::new(player)));
        self
    }

    /// Put `count` of `player`'s checkers in the off area.
    #[must_use]
    pub fn with_off(mut self, player: PlayerId, count: u8) -> Self {
        self.off[player].extend((0..count).map(|_| Checker::new(player)));
        self
    }

    // === Queries ===

    /// View of `point`. Out-of-range points read as empty.
    #[must_use]
    pub fn point(&self, point: u8) -> PointView {
        if !Self::on_board(point) {
            return PointView::default();
        }
        let stack = &self.points[Self::slot(point)];
        PointView {
            owner: stack.first().map(Checker::owner),
            count: stack.len() as u8,
        }
    }

    #[must_use]
    pub fn bar_count(&self, player: PlayerId) -> u8 {
        self.bar[player].len() as u8
    }

    #[must_use]
    pub fn off_count(&self, player: PlayerId) -> u8 {
        self.off[player].len() as u8
    }

    /// Checkers `player` has on points 1..=24.
    #[must_use]
    pub fn on_board_count(&self, player: PlayerId) -> u8 {
        self.occupied_by(player).map(|(_, count)| count).sum()
    }

    /// Checkers `player` owns across board, bar, and off area.
    #[must_use]
    pub fn checker_count(&self, player: PlayerId) -> u8 {
        self.on_board_count(player) + self.bar_count(player) + self.off_count(player)
    }

    /// Checkers `player` still has to bear off.
    #[must_use]
    pub fn remaining(&self, player: PlayerId) -> u8 {
        self.on_board_count(player) + self.bar_count(player)
    }

    /// Points occupied by `player`, ascending, with their counts.
    pub fn occupied_by(&self, player: PlayerId) -> impl Iterator<Item = (u8, u8)> + '_ {
        (1..=POINT_COUNT).filter_map(move |n| {
            let view = self.point(n);
            (view.owner == Some(player)).then_some((n, view.count))
        })
    }

    /// Points whose stack holds checkers of both players. Always empty for
    /// a board only changed through its own moves.
    pub fn shared_points(&self) -> impl Iterator<Item = u8> + '_ {
        self.points.iter().zip(1u8..).filter_map(|(stack, point)| {
            let first = stack.first()?.owner;
            stack.iter().any(|c| c.owner != first).then_some(point)
        })
    }

    /// Whether `player` has a checker on any point in `range`.
    #[must_use]
    pub fn has_checker_in_range(&self, player: PlayerId, range: RangeInclusive<u8>) -> bool {
        range.into_iter().any(|n| self.point(n).owner == Some(player))
    }

    /// Pips `player` needs to bear everything off from the board
    /// (bar and off checkers contribute nothing).
    #[must_use]
    pub fn pip_count(&self, player: PlayerId) -> u32 {
        let boundary = player.bear_off_boundary();
        self.occupied_by(player)
            .map(|(n, count)| u32::from((boundary - n as i8).unsigned_abs()) * u32::from(count))
            .sum()
    }

    /// Bearing off is allowed once the bar is empty and every on-board
    /// checker sits in the home quadrant.
    #[must_use]
    pub fn can_bear_off(&self, player: PlayerId) -> bool {
        let home = player.home_board();
        self.bar_count(player) == 0 && self.occupied_by(player).all(|(n, _)| home.contains(&n))
    }

    /// Whether `player` may land on `point`: empty, own, or a lone opposing blot.
    #[must_use]
    pub fn is_open_for(&self, player: PlayerId, point: u8) -> bool {
        if !Self::on_board(point) {
            return false;
        }
        let view = self.point(point);
        match view.owner {
            None => true,
            Some(owner) if owner == player => true,
            Some(_) => view.count == 1,
        }
    }

    /// Owned copy of the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            points: (1..=POINT_COUNT).map(|n| self.point(n)).collect(),
            bar: PlayerMap::new(|p| self.bar_count(p)),
            off: PlayerMap::new(|p| self.off_count(p)),
        }
    }

    // === Validation ===

    /// Check a point-to-point move without applying it.
    pub fn check_move(&self, player: PlayerId, from: u8, to: u8) -> EngineResult<()> {
        if !Self::on_board(from) || !Self::on_board(to) {
            return Err(EngineError::illegal_move(format!(
                "{} -> {} leaves the 1..=24 range",
                from, to
            )));
        }
        if self.bar_count(player) > 0 {
            return Err(EngineError::illegal_move(
                "checkers on the bar must re-enter first",
            ));
        }
        if self.point(from).owner != Some(player) {
            return Err(EngineError::illegal_move(format!(
                "no checker of {} on point {}",
                player, from
            )));
        }
        if (to as i8 - from as i8) * player.direction() <= 0 {
            return Err(EngineError::illegal_move(format!(
                "{} -> {} moves away from home",
                from, to
            )));
        }
        if !self.is_open_for(player, to) {
            return Err(EngineError::illegal_move(format!("point {} is blocked", to)));
        }
        Ok(())
    }

    /// Whether a point-to-point move is legal on the current board.
    #[must_use]
    pub fn is_legal_move(&self, player: PlayerId, from: u8, to: u8) -> bool {
        self.check_move(player, from, to).is_ok()
    }

    /// Whether a checker from `player`'s bar may enter on `to`.
    #[must_use]
    pub fn can_enter_from_bar(&self, player: PlayerId, to: u8) -> bool {
        player.entry_board().contains(&to) && self.is_open_for(player, to)
    }

    // === Mutation ===

    /// Move one checker from `from` to `to`, hitting a blot on `to`.
    ///
    /// Returns whether an opposing checker was sent to the bar.
    pub fn make_move(&mut self, player: PlayerId, from: u8, to: u8) -> EngineResult<bool> {
        self.check_move(player, from, to)?;
        let checker = self.take_from_point(from)?;
        Ok(self.land(player, checker, to))
    }

    /// Re-enter one checker from `player`'s bar onto `to`.
    ///
    /// Returns whether an opposing checker was sent to the bar.
    pub fn enter_from_bar(&mut self, player: PlayerId, to: u8) -> EngineResult<bool> {
        if self.bar_count(player) == 0 {
            return Err(EngineError::illegal_move(format!("{} has no checker on the bar", player)));
        }
        if !self.can_enter_from_bar(player, to) {
            return Err(EngineError::illegal_move(format!(
                "{} cannot enter on point {}",
                player, to
            )));
        }
        let checker = self.bar[player]
            .pop()
            .ok_or_else(|| EngineError::illegal_move("bar is empty"))?;
        Ok(self.land(player, checker, to))
    }

    /// Move one checker from `from` to `player`'s off area.
    pub fn bear_off_checker(&mut self, player: PlayerId, from: u8) -> EngineResult<()> {
        if !self.can_bear_off(player) {
            return Err(EngineError::illegal_move(format!(
                "{} still has checkers outside the home board",
                player
            )));
        }
        if !player.home_board().contains(&from) || self.point(from).owner != Some(player) {
            return Err(EngineError::illegal_move(format!(
                "no checker of {} to bear off on point {}",
                player, from
            )));
        }
        let checker = self.take_from_point(from)?;
        self.off[player].push(checker);
        Ok(())
    }

    /// Apply `mv` for `player`, dispatching on its shape.
    ///
    /// Returns whether an opposing checker was hit.
    pub fn apply(&mut self, player: PlayerId, mv: Move) -> EngineResult<bool> {
        match (mv.from, mv.to) {
            (Location::Point(from), Location::Point(to)) => self.make_move(player, from, to),
            (Location::Bar, Location::Point(to)) => self.enter_from_bar(player, to),
            (Location::Point(from), Location::Off) => {
                self.bear_off_checker(player, from)?;
                Ok(false)
            }
            _ => Err(EngineError::illegal_move(format!("{} is not a checker movement", mv))),
        }
    }

    // === Internals ===

    fn on_board(point: u8) -> bool {
        (1..=POINT_COUNT).contains(&point)
    }

    fn slot(point: u8) -> usize {
        point as usize - 1
    }

    fn take_from_point(&mut self, point: u8) -> EngineResult<Checker> {
        self.points[Self::slot(point)]
            .pop()
            .ok_or_else(|| EngineError::illegal_move(format!("no checker on point {}", point)))
    }

    /// Place `checker` on `to`, sending a lone opposing checker to its bar.
    /// Callers have already checked that `to` is open.
    fn land(&mut self, player: PlayerId, checker: Checker, to: u8) -> bool {
        let stack = &mut self.points[Self::slot(to)];
        let hit = match stack.first() {
            Some(c) if c.owner != player => stack.pop(),
            _ => None,
        };
        stack.push(checker);
        if let Some(blot) = hit {
            debug!(%player, point = to, "Checker hit");
            self.bar[blot.owner].push(blot);
        }
        hit.is_some()
    }
}
