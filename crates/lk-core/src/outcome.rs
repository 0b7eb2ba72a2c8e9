//! Resolving a player's choice into a positive or negative outcome.

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::scenario::{Choice, LuckDelta, Scenario};

/// Direction of a resolved outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Luck goes up.
    Positive,
    /// Luck goes down.
    Negative,
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// The outcome text, tagged with its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The option resolved well.
    Positive(String),
    /// The option resolved badly.
    Negative(String),
}

impl Outcome {
    /// The outcome text.
    pub fn text(&self) -> &str {
        match self {
            Self::Positive(text) | Self::Negative(text) => text,
        }
    }

    /// The outcome direction.
    pub fn sign(&self) -> Sign {
        match self {
            Self::Positive(_) => Sign::Positive,
            Self::Negative(_) => Sign::Negative,
        }
    }
}

/// Everything the caller needs to apply a resolved choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Id of the scenario the choice was made in.
    pub scenario_id: u32,
    /// Which option was chosen.
    pub choice: Choice,
    /// What happened.
    pub outcome: Outcome,
    /// The scenario's fixed luck delta.
    pub delta: LuckDelta,
}

impl Resolution {
    /// Outcome text.
    pub fn text(&self) -> &str {
        self.outcome.text()
    }

    /// Outcome direction.
    pub fn sign(&self) -> Sign {
        self.outcome.sign()
    }

    /// The delta with its sign applied: `+delta` or `-delta`.
    pub fn signed_delta(&self) -> i32 {
        match self.sign() {
            Sign::Positive => self.delta.value(),
            Sign::Negative => -self.delta.value(),
        }
    }
}

/// Pick the positive or negative outcome of `choice` with a fair coin
/// (`true` is positive).
pub fn resolve_outcome(scenario: &Scenario, choice: Choice, chance: &mut impl Chance) -> Resolution {
    let option = scenario.choice(choice);
    let outcome = if chance.flip() {
        Outcome::Positive(option.positive.clone())
    } else {
        Outcome::Negative(option.negative.clone())
    };

    log::debug!(
        "{scenario} choice {choice} resolved {} ({})",
        outcome.sign(),
        scenario.luck_delta()
    );

    Resolution {
        scenario_id: scenario.id(),
        choice,
        outcome,
        delta: scenario.luck_delta(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chance::ScriptedChance;
    use crate::content::ContentTable;
    use crate::tree::{NodeId, build_scenario_tree};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn root_scenario(delta: i32) -> Arc<Scenario> {
        let tree = build_scenario_tree(
            &ContentTable::builtin().unwrap(),
            &mut ScriptedChance::always(true, delta),
        )
        .unwrap();
        Arc::clone(tree.scenario(NodeId::ROOT).unwrap())
    }

    #[test]
    fn forced_positive() {
        let s = root_scenario(7);
        let r = resolve_outcome(&s, Choice::First, &mut ScriptedChance::always(true, 1));
        assert_eq!(r.sign(), Sign::Positive);
        assert_eq!(r.text(), s.choice(Choice::First).positive);
        assert_eq!(r.signed_delta(), 7);
        assert_eq!(r.scenario_id, 1);
    }

    #[test]
    fn forced_negative() {
        let s = root_scenario(7);
        let r = resolve_outcome(&s, Choice::Second, &mut ScriptedChance::always(false, 1));
        assert_eq!(r.sign(), Sign::Negative);
        assert_eq!(r.text(), s.choice(Choice::Second).negative);
        assert_eq!(r.signed_delta(), -7);
        assert_eq!(r.choice, Choice::Second);
    }

    #[test]
    fn same_draw_same_resolution() {
        let s = root_scenario(11);
        let a = resolve_outcome(&s, Choice::First, &mut StdRng::seed_from_u64(3));
        let b = resolve_outcome(&s, Choice::First, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn delta_constant_across_resolutions() {
        let s = root_scenario(13);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let r = resolve_outcome(&s, Choice::First, &mut rng);
            assert_eq!(r.delta.value(), 13);
        }
        assert_eq!(s.luck_delta().value(), 13);
    }

    #[test]
    fn roughly_even_split() {
        let s = root_scenario(5);
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 10_000;
        let positive = (0..trials)
            .filter(|_| resolve_outcome(&s, Choice::Second, &mut rng).sign() == Sign::Positive)
            .count();
        assert!(
            (4_700..=5_300).contains(&positive),
            "positive outcomes: {positive}/{trials}"
        );
    }

    #[test]
    fn outcome_serde_is_tagged() {
        let json = serde_json::to_string(&Outcome::Negative("Ouch".to_string())).unwrap();
        assert_eq!(json, r#"{"Negative":"Ouch"}"#);
    }
}
