//! Error types for the dice engine.

/// A one-shot action a roll allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Rerolling up to three normal dice, by count or by index.
    Reroll,
    /// Adding two normal dice to the pool.
    BloodSurge,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reroll => write!(f, "reroll"),
            Self::BloodSurge => write!(f, "blood surge"),
        }
    }
}

/// Errors that can occur while operating on a game.
///
/// None of these leave the game modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// Input could not be read as a command or integer.
    #[error("{0}")]
    Parse(String),

    /// A count or index falls outside its allowed range.
    #[error("{what} {value} is out of range ({min}..={max})")]
    OutOfRange {
        /// What was being checked.
        what: &'static str,
        /// The offending value.
        value: i64,
        /// Smallest allowed value.
        min: i64,
        /// Largest allowed value.
        max: i64,
    },

    /// Hunger dice cannot be picked for a reroll.
    #[error("index {index} is a hunger die")]
    IllegalDie {
        /// Index of the hunger die.
        index: usize,
    },

    /// Fewer normal dice than requested for a reroll.
    #[error("not enough dice to reroll: wanted {wanted}, got {available}")]
    InsufficientDice {
        /// Dice requested.
        wanted: usize,
        /// Normal dice in the pool.
        available: usize,
    },

    /// The one-shot action was already spent this roll.
    #[error("{0} already used")]
    AlreadyUsed(Action),

    /// The other one-shot action was spent this roll.
    #[error("can't use {requested}, {used} was used")]
    ConflictingAction {
        /// The action asked for.
        requested: Action,
        /// The action that blocks it.
        used: Action,
    },

    /// Nothing has been rolled yet.
    #[error("need to roll first")]
    EmptyPool,

    /// A manually entered face is not on a d10.
    #[error("face {value} is not between 1 and 10")]
    InvalidFace {
        /// The offending face.
        value: u32,
    },

    /// The number of manually entered faces does not match the pool.
    #[error("expected {expected} faces, got {got}")]
    PoolSizeMismatch {
        /// Dice in the pool.
        expected: usize,
        /// Faces given.
        got: usize,
    },
}

impl DiceError {
    /// An [`OutOfRange`](Self::OutOfRange) error for a size or index.
    pub(crate) fn out_of_range(what: &'static str, value: usize, min: usize, max: usize) -> Self {
        let wide = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
        Self::OutOfRange {
            what,
            value: wide(value),
            min: wide(min),
            max: wide(max),
        }
    }
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DiceError::IllegalDie { index: 3 }.to_string(),
            "index 3 is a hunger die"
        );
        assert_eq!(
            DiceError::AlreadyUsed(Action::Reroll).to_string(),
            "reroll already used"
        );
        assert_eq!(
            DiceError::ConflictingAction {
                requested: Action::BloodSurge,
                used: Action::Reroll,
            }
            .to_string(),
            "can't use blood surge, reroll was used"
        );
        assert_eq!(
            DiceError::OutOfRange {
                what: "reroll count",
                value: 4,
                min: 1,
                max: 3,
            }
            .to_string(),
            "reroll count 4 is out of range (1..=3)"
        );
    }

    #[test]
    fn out_of_range_saturates_huge_sizes() {
        assert_eq!(
            DiceError::out_of_range("total dice", usize::MAX, 0, 30),
            DiceError::OutOfRange {
                what: "total dice",
                value: i64::MAX,
                min: 0,
                max: 30,
            }
        );
    }
}
