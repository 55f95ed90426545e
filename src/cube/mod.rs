//! The doubling cube.
//!
//! Starts at 1 with no owner. Each accepted double multiplies the value by
//! two and hands ownership to the accepting player; only the owner (or
//! anyone, while unowned) may offer the next double. The cube is reset after
//! every completed game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{EngineError, EngineResult};

/// Stake multiplier for the current game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublingCube {
    value: u32,
    owner: Option<PlayerId>,
    cap: Option<u32>,
}

impl Default for DoublingCube {
    fn default() -> Self {
        Self::new(Some(crate::core::DEFAULT_CUBE_CAP))
    }
}

impl DoublingCube {
    /// Fresh cube limited to `cap` (`None` for no limit).
    #[must_use]
    pub fn new(cap: Option<u32>) -> Self {
        Self {
            value: 1,
            owner: None,
            cap,
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn cap(&self) -> Option<u32> {
        self.cap
    }

    /// Whether another double would stay within the cap.
    #[must_use]
    pub fn can_double(&self) -> bool {
        match (self.value.checked_mul(2), self.cap) {
            (None, _) => false,
            (Some(next), Some(cap)) => next <= cap,
            (Some(_), None) => true,
        }
    }

    /// Whether `player` is allowed to offer: the cube is centred or theirs.
    #[must_use]
    pub fn may_offer(&self, player: PlayerId) -> bool {
        self.owner.map_or(true, |owner| owner == player)
    }

    /// Double the value and give the cube to `new_owner`.
    ///
    /// Returns the new value.
    pub fn double_value(&mut self, new_owner: PlayerId) -> EngineResult<u32> {
        if !self.can_double() {
            return Err(EngineError::invalid_command(format!(
                "the cube is already at {}",
                self.value
            )));
        }
        self.value *= 2;
        self.owner = Some(new_owner);
        Ok(self.value)
    }

    /// Back to 1, centred.
    pub fn reset(&mut self) {
        self.value = 1;
        self.owner = None;
    }
}
