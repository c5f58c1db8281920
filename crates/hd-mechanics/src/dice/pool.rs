//! Pool evaluation: turning a set of faces into success counts.
//!
//! Each success die scores one. Criticals are paired afterwards: every pair
//! of tens is worth four successes, a lone ten is worth one.

use super::{Die, DieKind, DieOutcome};

/// Aggregated counts for a pool of dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolSummary {
    /// Total successes, critical pairing included.
    pub successes: u32,
    /// Number of dice showing a 10.
    pub criticals: u32,
    /// A hunger die shows a 10.
    pub hunger_critical: bool,
    /// A hunger die shows a 1.
    pub hunger_bestial: bool,
}

/// Successes granted by `criticals` tens once they are paired.
pub fn critical_bonus(criticals: u32) -> u32 {
    criticals * 2 - criticals % 2
}

/// Evaluate the current faces of `dice`.
pub fn evaluate(dice: &[Die]) -> PoolSummary {
    let mut summary = PoolSummary::default();

    for die in dice {
        match die.outcome() {
            DieOutcome::Success => summary.successes += 1,
            DieOutcome::CriticalSuccess => {
                summary.criticals += 1;
                if die.kind() == DieKind::Hunger {
                    summary.hunger_critical = true;
                }
            }
            DieOutcome::BestialFail => summary.hunger_bestial = true,
            DieOutcome::Fail => {}
        }
    }

    summary.successes += critical_bonus(summary.criticals);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(faces: &[(DieKind, u32)]) -> Vec<Die> {
        faces
            .iter()
            .map(|&(kind, value)| {
                let mut die = Die::new(kind);
                die.set_face(value);
                die
            })
            .collect()
    }

    #[test]
    fn critical_pairing_table() {
        let bonuses: Vec<u32> = (0..=4).map(critical_bonus).collect();
        assert_eq!(bonuses, vec![0, 1, 4, 5, 8]);
    }

    #[test]
    fn empty_pool() {
        assert_eq!(evaluate(&[]), PoolSummary::default());
    }

    #[test]
    fn plain_successes() {
        let dice = pool(&[
            (DieKind::Normal, 6),
            (DieKind::Normal, 9),
            (DieKind::Normal, 3),
            (DieKind::Hunger, 7),
        ]);
        let summary = evaluate(&dice);
        assert_eq!(summary.successes, 3);
        assert_eq!(summary.criticals, 0);
        assert!(!summary.hunger_critical);
        assert!(!summary.hunger_bestial);
    }

    #[test]
    fn paired_normal_criticals_with_bestial_hunger() {
        let dice = pool(&[
            (DieKind::Normal, 10),
            (DieKind::Normal, 10),
            (DieKind::Hunger, 1),
        ]);
        let summary = evaluate(&dice);
        assert_eq!(summary.criticals, 2);
        assert_eq!(summary.successes, 4);
        assert!(!summary.hunger_critical);
        assert!(summary.hunger_bestial);
    }

    #[test]
    fn hunger_critical_is_flagged() {
        let dice = pool(&[(DieKind::Normal, 10), (DieKind::Hunger, 10)]);
        let summary = evaluate(&dice);
        assert_eq!(summary.criticals, 2);
        assert_eq!(summary.successes, 4);
        assert!(summary.hunger_critical);
    }

    #[test]
    fn three_criticals_plus_success() {
        let dice = pool(&[
            (DieKind::Normal, 10),
            (DieKind::Normal, 10),
            (DieKind::Normal, 10),
            (DieKind::Normal, 8),
        ]);
        // One pair (4) + one lone ten (1) + one success.
        assert_eq!(evaluate(&dice).successes, 6);
    }

    #[test]
    fn normal_one_is_not_bestial() {
        let dice = pool(&[(DieKind::Normal, 1)]);
        assert!(!evaluate(&dice).hunger_bestial);
    }

    proptest! {
        #[test]
        fn successes_never_below_plain_count(
            faces in prop::collection::vec((any::<bool>(), 1u32..=10), 0..20)
        ) {
            let dice: Vec<Die> = faces
                .iter()
                .map(|&(hunger, value)| {
                    let kind = if hunger { DieKind::Hunger } else { DieKind::Normal };
                    let mut die = Die::new(kind);
                    die.set_face(value);
                    die
                })
                .collect();
            let summary = evaluate(&dice);
            let plain = faces.iter().filter(|(_, v)| (6..=9).contains(v)).count() as u32;
            let tens = faces.iter().filter(|(_, v)| *v == 10).count() as u32;
            prop_assert_eq!(summary.criticals, tens);
            prop_assert_eq!(summary.successes, plain + critical_bonus(tens));
            prop_assert!(summary.successes >= plain + tens);
        }
    }
}
