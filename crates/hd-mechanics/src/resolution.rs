//! Outcome classification for an evaluated pool.
//!
//! A difficulty of 0 means "any success counts". Otherwise the pool needs at
//! least `difficulty` successes. A winning pool with two or more tens is a
//! critical, and turns messy when a hunger die shows one of the tens. A losing
//! pool with a hunger die on 1 is a bestial failure.

use serde::{Deserialize, Serialize};

use crate::dice::PoolSummary;

/// The named result of a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollLabel {
    /// Enough successes, fewer than two criticals.
    Success,
    /// Enough successes with at least one pair of criticals, none on hunger dice.
    CriticalSuccess,
    /// A critical win where a hunger die rolled a 10.
    MessyCritical,
    /// Not enough successes.
    Failure,
    /// Not enough successes and a hunger die rolled a 1.
    BestialFailure,
}

impl RollLabel {
    /// Returns true for the three winning labels.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            Self::Success | Self::CriticalSuccess | Self::MessyCritical
        )
    }
}

impl std::fmt::Display for RollLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::MessyCritical => write!(f, "Messy Critical"),
            Self::Failure => write!(f, "Failure"),
            Self::BestialFailure => write!(f, "Bestial Failure"),
        }
    }
}

/// Classify an evaluated pool against a difficulty.
pub fn classify(summary: &PoolSummary, difficulty: u32) -> RollLabel {
    let passed = if difficulty == 0 {
        summary.successes > 0
    } else {
        summary.successes >= difficulty
    };

    if passed {
        if summary.criticals < 2 {
            RollLabel::Success
        } else if summary.hunger_critical {
            RollLabel::MessyCritical
        } else {
            RollLabel::CriticalSuccess
        }
    } else if summary.hunger_bestial {
        RollLabel::BestialFailure
    } else {
        RollLabel::Failure
    }
}
