//! Legal single-checker move generation.
//!
//! Options are generated one checker movement at a time, for every unused
//! roll value:
//!
//! - With checkers on the bar, only re-entry moves are offered.
//! - Otherwise, for each point the player occupies (ascending) and each roll
//!   (in roll order), the move is offered if the target is open, or if the
//!   player may bear off and the target lies past the home board edge.
//!
//! Roll values outside 1..=6 are ignored. Duplicates collapse to their first occurrence, so option order is stable
//! for a given board and roll list.

use rustc_hash::FxHashSet;

use super::layout::{Board, POINT_COUNT};
use crate::core::{Move, PlayerId, Rolls, MAX_DIE, MIN_DIE};

/// Point a checker enters on from the bar with roll `roll`.
#[must_use]
pub fn entry_point(player: PlayerId, roll: u8) -> u8 {
    if player == PlayerId::ONE {
        roll
    } else {
        POINT_COUNT + 1 - roll
    }
}

impl Board {
    /// Every distinct single-checker move `player` may make with `rolls`.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId, rolls: &[u8]) -> Vec<Move> {
        let faces: Rolls = rolls
            .iter()
            .copied()
            .filter(|roll| (MIN_DIE..=MAX_DIE).contains(roll))
            .collect();
        let rolls = faces.as_slice();

        if self.bar_count(player) > 0 {
            return coalesce(rolls.iter().filter_map(|&roll| {
                let to = entry_point(player, roll);
                self.can_enter_from_bar(player, to).then_some(Move::enter(to))
            }));
        }

        let bearing_off = self.can_bear_off(player);
        let boundary = player.bear_off_boundary();
        let dir = player.direction();

        coalesce(self.occupied_by(player).flat_map(|(from, _)| {
            rolls.iter().filter_map(move |&roll| {
                let target = from as i8 + roll as i8 * dir;
                if (target - boundary) * dir >= 0 {
                    bearing_off.then_some(Move::bear_off(from))
                } else {
                    let to = target as u8;
                    self.is_open_for(player, to).then_some(Move::new(from, to))
                }
            })
        }))
    }

    /// Whether `player` has at least one legal move with `rolls`.
    #[must_use]
    pub fn has_legal_move(&self, player: PlayerId, rolls: &[u8]) -> bool {
        !self.legal_moves(player, rolls).is_empty()
    }
}

fn coalesce(candidates: impl Iterator<Item = Move>) -> Vec<Move> {
    let mut seen = FxHashSet::default();
    candidates.filter(|mv| seen.insert(*mv)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point() {
        assert_eq!(entry_point(PlayerId::ONE, 3), 3);
        assert_eq!(entry_point(PlayerId::TWO, 3), 22);
        assert_eq!(entry_point(PlayerId::TWO, 6), 19);
    }

    #[test]
    fn test_opening_moves_player_one() {
        let board = Board::new();
        let moves = board.legal_moves(PlayerId::ONE, &[3, 1]);

        // 12 -> 13 is missing: point 13 holds five of player 2.
        assert_eq!(
            moves,
            vec![
                Move::new(1, 4),
                Move::new(1, 2),
                Move::new(12, 15),
                Move::new(17, 20),
                Move::new(17, 18),
                Move::new(19, 22),
                Move::new(19, 20),
            ]
        );
    }

    #[test]
    fn test_opening_moves_respect_blocks() {
        let board = Board::new();
        // Player 1 at 1 with a 5 lands on 6 (five opposing checkers).
        let moves = board.legal_moves(PlayerId::ONE, &[5]);
        assert!(!moves.contains(&Move::new(1, 6)));
        assert!(moves.contains(&Move::new(12, 17)));
    }

    #[test]
    fn test_doubles_do_not_duplicate() {
        let board = Board::new();
        let moves = board.legal_moves(PlayerId::TWO, &[2, 2, 2, 2]);
        let unique: FxHashSet<_> = moves.iter().copied().collect();
        assert_eq!(unique.len(), moves.len());
        assert_eq!(moves[0], Move::new(6, 4));
    }

    #[test]
    fn test_bar_forces_entry() {
        let board = Board::new().with_bar(PlayerId::TWO, 1);
        let moves = board.legal_moves(PlayerId::TWO, &[1, 6]);

        // 24 is own, 19 holds five of player 1.
        assert_eq!(moves, vec![Move::enter(24)]);
        assert!(moves.iter().all(Move::is_bar_entry));
    }

    #[test]
    fn test_closed_board_yields_nothing() {
        let mut board = Board::empty().with_bar(PlayerId::ONE, 1);
        for n in 1..=6 {
            board = board.with_point(PlayerId::TWO, n, 2);
        }
        assert!(board.legal_moves(PlayerId::ONE, &[1, 2, 3, 4, 5, 6]).is_empty());
        assert!(!board.has_legal_move(PlayerId::ONE, &[6]));
    }

    #[test]
    fn test_bear_off_with_overshoot() {
        let board = Board::empty()
            .with_point(PlayerId::ONE, 20, 1)
            .with_point(PlayerId::ONE, 23, 1);
        let moves = board.legal_moves(PlayerId::ONE, &[6]);
        assert_eq!(moves, vec![Move::bear_off(20), Move::bear_off(23)]);
    }

    #[test]
    fn test_no_bear_off_outside_home() {
        let board = Board::empty()
            .with_point(PlayerId::TWO, 2, 1)
            .with_point(PlayerId::TWO, 9, 1);
        let moves = board.legal_moves(PlayerId::TWO, &[3]);
        assert_eq!(moves, vec![Move::new(9, 6)]);
    }

    #[test]
    fn test_out_of_range_rolls_ignored() {
        let board = Board::new();
        for player in PlayerId::both() {
            assert!(board.legal_moves(player, &[0]).is_empty());
            assert!(board.legal_moves(player, &[7, 200, u8::MAX]).is_empty());
            assert_eq!(
                board.legal_moves(player, &[0, 3, 130]),
                board.legal_moves(player, &[3])
            );
        }

        let entering = Board::empty().with_bar(PlayerId::TWO, 1);
        assert!(entering.legal_moves(PlayerId::TWO, &[0, 25]).is_empty());
    }
}
