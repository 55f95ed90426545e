//! Match-level scoring and progress.
//!
//! ## Ending a match
//!
//! A match is over as soon as any of these holds:
//! - it was forced over (END_MATCH)
//! - the configured number of games has been played
//! - either score reached the point target

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{MatchConfig, Player, PlayerId, PlayerMap};

/// Name reported by [`MatchManager::winner_name`] on equal scores.
pub const DRAW: &str = "Draw";

/// Scores, games played, and the two players of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchManager {
    players: PlayerMap<Player>,
    scores: PlayerMap<u32>,
    match_length: u32,
    point_target: u32,
    games_played: u32,
    forced_over: bool,
}

impl MatchManager {
    /// New match between `names[0]` (player 1) and `names[1]` (player 2).
    ///
    /// `config` is expected to have been validated.
    pub fn new(config: &MatchConfig, names: [&str; 2]) -> Self {
        Self {
            players: PlayerMap::new(|id| Player::new(id, names[id.index()])),
            scores: PlayerMap::with_value(0),
            match_length: config.match_length,
            point_target: config.effective_point_target(),
            games_played: 0,
            forced_over: false,
        }
    }

    /// Add `points` to `player`. `None` adds nothing.
    pub fn increment_score(&mut self, player: Option<PlayerId>, points: u32) {
        if let Some(player) = player {
            self.scores[player] += points;
            info!(%player, points, total = self.scores[player], "Score updated");
        }
    }

    pub fn increment_games_played(&mut self) {
        self.games_played += 1;
    }

    /// Force the match over regardless of games played or scores.
    pub fn set_match_over(&mut self) {
        self.forced_over = true;
    }

    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.forced_over
            || self.games_played >= self.match_length
            || self.scores.iter().any(|(_, &s)| s >= self.point_target)
    }

    /// Player with the strictly higher score.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let (one, two) = (self.scores[PlayerId::ONE], self.scores[PlayerId::TWO]);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(PlayerId::ONE),
            std::cmp::Ordering::Less => Some(PlayerId::TWO),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Match winner: the leader once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_match_over() {
            self.leader()
        } else {
            None
        }
    }

    /// Name of the current leader, or [`DRAW`] on equal scores.
    #[must_use]
    pub fn winner_name(&self) -> &str {
        self.leader().map_or(DRAW, |id| self.players[id].name())
    }

    /// 1-based number of the game being (or about to be) played.
    #[must_use]
    pub fn current_game_number(&self) -> u32 {
        self.games_played + 1
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn match_length(&self) -> u32 {
        self.match_length
    }

    #[must_use]
    pub fn point_target(&self) -> u32 {
        self.point_target
    }
}
