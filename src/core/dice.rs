//! Dice values and the roll pool they expand to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{EngineError, EngineResult};

/// Lowest face of a die.
pub const MIN_DIE: u8 = 1;

/// Highest face of a die.
pub const MAX_DIE: u8 = 6;

/// Unused roll values for the current turn: two entries, or four on a double.
pub type Rolls = SmallVec<[u8; 4]>;

/// A validated pair of die faces.
///
/// Deserialization goes through [`DicePair::new`], so out-of-range faces
/// are rejected there too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DiceFaces")]
pub struct DicePair {
    die1: u8,
    die2: u8,
}

impl DicePair {
    /// Create a pair, rejecting faces outside 1..=6.
    pub fn new(die1: u8, die2: u8) -> EngineResult<Self> {
        let valid = |d: u8| (MIN_DIE..=MAX_DIE).contains(&d);
        if valid(die1) && valid(die2) {
            Ok(Self { die1, die2 })
        } else {
            Err(EngineError::InvalidDice { die1, die2 })
        }
    }

    /// Build from faces already known to be in range.
    pub(crate) fn from_faces(die1: u8, die2: u8) -> Self {
        debug_assert!((MIN_DIE..=MAX_DIE).contains(&die1) && (MIN_DIE..=MAX_DIE).contains(&die2));
        Self { die1, die2 }
    }

    #[must_use]
    pub fn die1(&self) -> u8 {
        self.die1
    }

    #[must_use]
    pub fn die2(&self) -> u8 {
        self.die2
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.die1 == self.die2
    }

    /// Roll values this pair grants: both faces, or the face four times
    /// on a double.
    #[must_use]
    pub fn rolls(&self) -> Rolls {
        if self.is_double() {
            SmallVec::from_elem(self.die1, 4)
        } else {
            SmallVec::from_slice(&[self.die1, self.die2])
        }
    }
}

/// Unchecked wire form of a [`DicePair`].
#[derive(Deserialize)]
struct DiceFaces {
    die1: u8,
    die2: u8,
}

impl TryFrom<DiceFaces> for DicePair {
    type Error = EngineError;

    fn try_from(faces: DiceFaces) -> EngineResult<Self> {
        Self::new(faces.die1, faces.die2)
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} and {}", self.die1, self.die2)
    }
}
