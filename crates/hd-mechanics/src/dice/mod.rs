//! Dice of the hunger pool.
//!
//! Every die is a d10. A die is either a normal die or a hunger die; the
//! kind is fixed at creation and only changes how the face is read. Hunger
//! dice add the bestial failure on a 1 and taint criticals they take part in.

pub mod pool;

pub use pool::{PoolSummary, evaluate};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on every die in the pool.
pub const FACES: u32 = 10;

/// Which sub-pool a die belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// A regular die. Can be rerolled individually.
    Normal,
    /// A hunger die. Never rerolled, can produce a bestial failure.
    Hunger,
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Hunger => write!(f, "Hunger"),
        }
    }
}

/// How a single face is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieOutcome {
    /// 1-5 on a normal die, 2-5 on a hunger die.
    Fail,
    /// 6-9.
    Success,
    /// A 10.
    CriticalSuccess,
    /// A 1 on a hunger die.
    BestialFail,
}

impl std::fmt::Display for DieOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "Fail"),
            Self::Success => write!(f, "Success"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::BestialFail => write!(f, "Bestial Fail"),
        }
    }
}

/// A single d10 with its current face.
///
/// The face is 0 until the die is rolled for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    kind: DieKind,
    value: u32,
}

impl Die {
    /// An unrolled die of the given kind.
    pub fn new(kind: DieKind) -> Self {
        Self { kind, value: 0 }
    }

    /// An unrolled normal die.
    pub fn normal() -> Self {
        Self::new(DieKind::Normal)
    }

    /// An unrolled hunger die.
    pub fn hunger() -> Self {
        Self::new(DieKind::Hunger)
    }

    /// The kind of this die.
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// The current face, or 0 if never rolled.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns true once the die has been rolled or given a face.
    pub fn is_rolled(&self) -> bool {
        self.value != 0
    }

    /// Roll the die, replacing its face with a uniform value in `1..=FACES`.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) {
        self.value = rng.random_range(1..=FACES);
        tracing::trace!(kind = %self.kind, value = self.value, "die rolled");
    }

    /// Put a face read off a physical die. Range is checked by the caller.
    pub(crate) fn set_face(&mut self, value: u32) {
        self.value = value;
    }

    /// Read the current face according to the die's kind.
    pub fn outcome(&self) -> DieOutcome {
        match (self.kind, self.value) {
            (_, FACES) => DieOutcome::CriticalSuccess,
            (DieKind::Hunger, 1) => DieOutcome::BestialFail,
            (_, 6..=9) => DieOutcome::Success,
            _ => DieOutcome::Fail,
        }
    }
}
