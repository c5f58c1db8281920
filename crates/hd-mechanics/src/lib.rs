//! Dice pool engine for hunger-based d10 pools.
//!
//! Provides the dice and their per-kind reading, pool evaluation with
//! critical pairing, outcome classification against a difficulty, and the
//! [`Game`] state machine that guards rerolls and blood surges.

pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod resolution;

pub use config::GameConfig;
pub use dice::{Die, DieKind, DieOutcome, PoolSummary, evaluate};
pub use error::{Action, DiceError, DiceResult};
pub use game::{DieSnapshot, Game, GameSnapshot};
pub use resolution::{RollLabel, classify};
