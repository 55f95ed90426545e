//! Match configuration.
//!
//! Callers configure a match at startup by providing a `MatchConfig`:
//! - match length (games, and by default the point target)
//! - doubling cube cap policy
//! - dice seed
//! - how often the move selector may be re-asked after a bad index

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default cap on the doubling cube value.
pub const DEFAULT_CUBE_CAP: u32 = 64;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games that decides the match (must be positive).
    pub match_length: u32,

    /// Score that ends the match early. `None` uses `match_length`.
    pub point_target: Option<u32>,

    /// Highest value the cube may reach. `None` for an uncapped cube.
    pub cube_cap: Option<u32>,

    /// Seed for the dice.
    pub seed: u64,

    /// Selector retries per move before the turn engine gives up.
    pub max_selection_attempts: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_length: 1,
            point_target: None,
            cube_cap: Some(DEFAULT_CUBE_CAP),
            seed: 42,
            max_selection_attempts: 16,
        }
    }
}

impl MatchConfig {
    /// Create a configuration for a match of `match_length` games.
    pub fn new(match_length: u32) -> Self {
        Self {
            match_length,
            ..Self::default()
        }
    }

    /// Set an explicit point target.
    #[must_use]
    pub fn with_point_target(mut self, target: u32) -> Self {
        self.point_target = Some(target);
        self
    }

    /// Cap the cube at `cap`.
    #[must_use]
    pub fn with_cube_cap(mut self, cap: u32) -> Self {
        self.cube_cap = Some(cap);
        self
    }

    /// Let the cube double without limit.
    #[must_use]
    pub fn uncapped_cube(mut self) -> Self {
        self.cube_cap = None;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the selector retry budget.
    #[must_use]
    pub fn with_max_selection_attempts(mut self, attempts: u32) -> Self {
        self.max_selection_attempts = attempts;
        self
    }

    /// Score that ends the match.
    #[must_use]
    pub fn effective_point_target(&self) -> u32 {
        self.point_target.unwrap_or(self.match_length)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> EngineResult<()> {
        if self.match_length == 0 {
            return Err(EngineError::invalid_config(
                "match length must be a positive integer",
            ));
        }
        if self.point_target == Some(0) {
            return Err(EngineError::invalid_config("point target must be positive"));
        }
        if matches!(self.cube_cap, Some(cap) if cap < 1) {
            return Err(EngineError::invalid_config("cube cap must be at least 1"));
        }
        if self.max_selection_attempts == 0 {
            return Err(EngineError::invalid_config(
                "at least one selection attempt is required",
            ));
        }
        Ok(())
    }
}
