//! The game: one pool, one difficulty, and the one-shot actions of a roll.
//!
//! A roll cycle starts with [`Game::setup`] and [`Game::roll`]. After the
//! roll the player may spend exactly one of: a reroll by index, a reroll by
//! count, or a blood surge. Every guard is checked before anything changes,
//! so a failed call leaves the game as it was.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, MAX_POOL_LIMIT};
use crate::dice::{Die, DieKind, DieOutcome, FACES, PoolSummary, evaluate};
use crate::error::{Action, DiceError, DiceResult};
use crate::resolution::{RollLabel, classify};

/// Most normal dice a reroll by count may touch.
pub const MAX_REROLL: i64 = 3;

/// Normal dice added by a blood surge.
pub const BLOOD_SURGE_DICE: usize = 2;

/// A dice pool with its difficulty, one-shot flags and evaluated result.
#[derive(Debug, Clone)]
pub struct Game {
    dice: Vec<Die>,
    difficulty: u32,
    used_reroll: bool,
    used_blood_surge: bool,
    summary: PoolSummary,
    label: Option<RollLabel>,
    max_pool: usize,
    rng: StdRng,
}

impl Game {
    /// Create an empty game.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config.rng(), config.max_pool.clamp(1, MAX_POOL_LIMIT))
    }

    fn with_rng(rng: StdRng, max_pool: usize) -> Self {
        Self {
            dice: Vec::new(),
            difficulty: 0,
            used_reroll: false,
            used_blood_surge: false,
            summary: PoolSummary::default(),
            label: None,
            max_pool,
            rng,
        }
    }

    /// The dice in pool order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Number of dice in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Number of normal dice in the pool.
    pub fn normal_count(&self) -> usize {
        self.dice
            .iter()
            .filter(|d| d.kind() == DieKind::Normal)
            .count()
    }

    /// The target difficulty. 0 means any success counts.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// The evaluated counts of the current faces.
    pub fn summary(&self) -> &PoolSummary {
        &self.summary
    }

    /// Total successes, critical pairing included.
    pub fn successes(&self) -> u32 {
        self.summary.successes
    }

    /// The result label, or `None` before the first roll.
    pub fn label(&self) -> Option<RollLabel> {
        self.label
    }

    /// Whether a reroll was spent this cycle.
    pub fn used_reroll(&self) -> bool {
        self.used_reroll
    }

    /// Whether a blood surge was spent this cycle.
    pub fn used_blood_surge(&self) -> bool {
        self.used_blood_surge
    }

    /// Replace the pool with `total - hunger` normal dice followed by
    /// `hunger` hunger dice, and reset the flags and derived state.
    pub fn setup(&mut self, total: usize, hunger: usize, difficulty: u32) -> DiceResult<()> {
        if total > self.max_pool {
            return Err(DiceError::out_of_range("total dice", total, 0, self.max_pool));
        }
        if hunger > total {
            return Err(DiceError::out_of_range("hunger dice", hunger, 0, total));
        }

        self.reset_pool(total, hunger, difficulty);
        tracing::debug!(total, hunger, difficulty, "pool set up");
        Ok(())
    }

    /// Lay out a fresh unrolled pool. Counts are already validated.
    fn reset_pool(&mut self, total: usize, hunger: usize, difficulty: u32) {
        let mut dice = Vec::with_capacity(total);
        dice.extend(std::iter::repeat_n(Die::normal(), total - hunger));
        dice.extend(std::iter::repeat_n(Die::hunger(), hunger));

        self.dice = dice;
        self.difficulty = difficulty;
        self.used_reroll = false;
        self.used_blood_surge = false;
        self.summary = PoolSummary::default();
        self.label = None;
    }

    /// Roll every die and start a new cycle of one-shot actions.
    pub fn roll(&mut self) {
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        self.used_reroll = false;
        self.used_blood_surge = false;
        self.reevaluate();
    }

    /// Check that every index names a normal die in the pool.
    pub fn can_reroll_by_index(&self, indexes: &[usize]) -> DiceResult<()> {
        for &index in indexes {
            let die = self.dice.get(index).ok_or_else(|| {
                DiceError::out_of_range("index", index, 0, self.dice.len().saturating_sub(1))
            })?;
            if die.kind() == DieKind::Hunger {
                return Err(DiceError::IllegalDie { index });
            }
        }
        Ok(())
    }

    /// Reroll the dice at `indexes`. A repeated index is rolled again and
    /// keeps its last face.
    pub fn reroll_by_index(&mut self, indexes: &[usize]) -> DiceResult<()> {
        self.can_reroll_by_index(indexes)?;
        self.check_reroll_available()?;

        for &index in indexes {
            self.dice[index].roll(&mut self.rng);
        }
        self.used_reroll = true;

        tracing::debug!(?indexes, "rerolled by index");
        self.reevaluate();
        Ok(())
    }

    /// Check that `count` is in `1..=3` and the pool has that many normal dice.
    pub fn can_reroll_count(&self, count: i64) -> DiceResult<()> {
        self.checked_reroll_count(count).map(|_| ())
    }

    fn checked_reroll_count(&self, count: i64) -> DiceResult<usize> {
        if !(1..=MAX_REROLL).contains(&count) {
            return Err(DiceError::OutOfRange {
                what: "reroll count",
                value: count,
                min: 1,
                max: MAX_REROLL,
            });
        }
        let wanted = count as usize;
        let available = self.normal_count();
        if available < wanted {
            return Err(DiceError::InsufficientDice { wanted, available });
        }
        Ok(wanted)
    }

    /// Reroll the first `count` normal dice in pool order. Hunger dice are
    /// skipped.
    pub fn reroll_count(&mut self, count: i64) -> DiceResult<()> {
        let wanted = self.checked_reroll_count(count)?;
        self.check_reroll_available()?;

        for die in self
            .dice
            .iter_mut()
            .filter(|d| d.kind() == DieKind::Normal)
            .take(wanted)
        {
            die.roll(&mut self.rng);
        }
        self.used_reroll = true;

        tracing::debug!(count, "rerolled by count");
        self.reevaluate();
        Ok(())
    }

    /// Check that a blood surge is allowed right now.
    pub fn can_blood_surge(&self) -> DiceResult<()> {
        if self.dice.is_empty() || self.label.is_none() {
            return Err(DiceError::EmptyPool);
        }
        if self.used_blood_surge {
            return Err(DiceError::AlreadyUsed(Action::BloodSurge));
        }
        if self.used_reroll {
            return Err(DiceError::ConflictingAction {
                requested: Action::BloodSurge,
                used: Action::Reroll,
            });
        }
        Ok(())
    }

    /// Put two freshly rolled normal dice at the front of the pool.
    /// Existing dice move up by two indexes.
    pub fn blood_surge(&mut self) -> DiceResult<()> {
        self.can_blood_surge()?;

        let mut dice = Vec::with_capacity(self.dice.len() + BLOOD_SURGE_DICE);
        for _ in 0..BLOOD_SURGE_DICE {
            let mut die = Die::normal();
            die.roll(&mut self.rng);
            dice.push(die);
        }
        dice.append(&mut self.dice);
        self.dice = dice;
        self.used_blood_surge = true;

        tracing::debug!(pool = self.dice.len(), "blood surge");
        self.reevaluate();
        Ok(())
    }

    /// Overwrite every face with values read off physical dice, in pool
    /// order, and evaluate. The one-shot flags are kept.
    pub fn set_faces(&mut self, faces: &[u32]) -> DiceResult<()> {
        if faces.len() != self.dice.len() {
            return Err(DiceError::PoolSizeMismatch {
                expected: self.dice.len(),
                got: faces.len(),
            });
        }
        if let Some(&value) = faces.iter().find(|v| !(1..=FACES).contains(*v)) {
            return Err(DiceError::InvalidFace { value });
        }

        for (die, &value) in self.dice.iter_mut().zip(faces) {
            die.set_face(value);
        }
        self.reevaluate();
        Ok(())
    }

    /// Roll a standalone rouse check: a fresh `setup(1, 1, 0)` game, rolled.
    /// Only the RNG stream is shared with this game.
    pub fn rouse_check(&mut self) -> Game {
        let mut check = Game::with_rng(StdRng::from_rng(&mut self.rng), 1);
        check.reset_pool(1, 1, 0);
        check.roll();
        check
    }

    /// A serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            dice: self
                .dice
                .iter()
                .enumerate()
                .map(|(index, die)| DieSnapshot {
                    index,
                    kind: die.kind(),
                    outcome: die.outcome(),
                    value: die.value(),
                })
                .collect(),
            difficulty: self.difficulty,
            successes: self.summary.successes,
            criticals: self.summary.criticals,
            hunger_critical: self.summary.hunger_critical,
            hunger_bestial: self.summary.hunger_bestial,
            label: self.label,
            used_reroll: self.used_reroll,
            used_blood_surge: self.used_blood_surge,
        }
    }

    /// Render the pool and result as text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn check_reroll_available(&self) -> DiceResult<()> {
        if self.used_reroll {
            return Err(DiceError::AlreadyUsed(Action::Reroll));
        }
        if self.used_blood_surge {
            return Err(DiceError::ConflictingAction {
                requested: Action::Reroll,
                used: Action::BloodSurge,
            });
        }
        Ok(())
    }

    fn reevaluate(&mut self) {
        self.summary = evaluate(&self.dice);
        let label = classify(&self.summary, self.difficulty);
        self.label = Some(label);
        tracing::debug!(
            successes = self.summary.successes,
            criticals = self.summary.criticals,
            %label,
            "pool evaluated"
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, die) in self.dice.iter().enumerate() {
            writeln!(
                f,
                "{index} - {} Dice. {} ({})",
                die.kind(),
                die.outcome(),
                die.value()
            )?;
        }
        match self.label {
            Some(label) => write!(
                f,
                "\nRoll Result: {label}! ({})\n",
                self.summary.successes
            ),
            None => write!(f, "\nNot rolled yet\n"),
        }
    }
}

/// One die in a [`GameSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieSnapshot {
    /// Position in the pool.
    pub index: usize,
    /// Normal or hunger.
    pub kind: DieKind,
    /// How the face reads.
    pub outcome: DieOutcome,
    /// The face.
    pub value: u32,
}

/// A serializable view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Dice in pool order.
    pub dice: Vec<DieSnapshot>,
    /// Target difficulty.
    pub difficulty: u32,
    /// Total successes.
    pub successes: u32,
    /// Dice showing a 10.
    pub criticals: u32,
    /// A hunger die shows a 10.
    pub hunger_critical: bool,
    /// A hunger die shows a 1.
    pub hunger_bestial: bool,
    /// Result label, absent before the first roll.
    pub label: Option<RollLabel>,
    /// Reroll spent.
    pub used_reroll: bool,
    /// Blood surge spent.
    pub used_blood_surge: bool,
}
