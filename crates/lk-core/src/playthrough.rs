//! The linear sequence of scenarios for one playthrough.

use std::sync::Arc;

use crate::error::{ScenarioError, ScenarioResult};
use crate::path::Path;
use crate::scenario::Scenario;

/// An ordered, forward-only sequence of scenarios with a cursor.
///
/// Once the cursor moves past the last scenario, [`Playthrough::current`]
/// returns `None` and [`Playthrough::advance`] does nothing.
#[derive(Debug, Clone, Default)]
pub struct Playthrough {
    scenarios: Vec<Arc<Scenario>>,
    cursor: usize,
}

/// Build a playthrough from an ordered scenario list.
///
/// An absent list is an error; an empty list gives an empty playthrough.
pub fn build_sequence(scenarios: Option<Vec<Arc<Scenario>>>) -> ScenarioResult<Playthrough> {
    let scenarios = scenarios.ok_or(ScenarioError::MissingInput)?;
    let mut playthrough = Playthrough::default();
    for scenario in scenarios {
        playthrough.append(scenario);
    }
    Ok(playthrough)
}

impl Playthrough {
    fn append(&mut self, scenario: Arc<Scenario>) {
        self.scenarios.push(scenario);
    }

    /// The scenario under the cursor.
    pub fn current(&self) -> Option<&Scenario> {
        self.scenarios.get(self.cursor).map(Arc::as_ref)
    }

    /// Move the cursor forward. No-op once past the end.
    pub fn advance(&mut self) {
        if self.cursor < self.scenarios.len() {
            self.cursor += 1;
        }
    }

    /// Zero-based cursor position, equal to `len()` once finished.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor has moved past the last scenario.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.scenarios.len()
    }

    /// Scenarios not yet reached, including the current one.
    pub fn remaining(&self) -> usize {
        self.scenarios.len() - self.cursor
    }

    /// Total number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the playthrough holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// All scenarios in order, independent of the cursor.
    pub fn to_list(&self) -> Vec<Arc<Scenario>> {
        self.scenarios.clone()
    }
}

impl From<Path> for Playthrough {
    fn from(path: Path) -> Self {
        Self {
            scenarios: path.into_scenarios(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chance::ScriptedChance;
    use crate::content::ContentTable;
    use crate::path::select_path;
    use crate::tree::build_scenario_tree;

    fn scenarios() -> Vec<Arc<Scenario>> {
        let tree = build_scenario_tree(
            &ContentTable::builtin().unwrap(),
            &mut ScriptedChance::always(true, 4),
        )
        .unwrap();
        select_path(&tree, &mut ScriptedChance::always(true, 4)).into_scenarios()
    }

    #[test]
    fn none_input_is_error() {
        assert!(matches!(
            build_sequence(None),
            Err(ScenarioError::MissingInput)
        ));
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        let mut p = build_sequence(Some(Vec::new())).unwrap();
        assert!(p.is_empty());
        assert!(p.current().is_none());
        assert!(p.is_finished());
        p.advance();
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn forward_traversal() {
        let list = scenarios();
        let mut p = build_sequence(Some(list.clone())).unwrap();
        assert_eq!(p.len(), 4);
        for expected in &list {
            assert_eq!(p.current(), Some(expected.as_ref()));
            p.advance();
        }
        assert!(p.current().is_none());
        assert!(p.is_finished());
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn advance_past_end_is_noop() {
        let mut p = build_sequence(Some(scenarios())).unwrap();
        for _ in 0..10 {
            p.advance();
        }
        assert_eq!(p.position(), 4);
        assert!(p.current().is_none());
    }

    #[test]
    fn to_list_preserves_order() {
        let list = scenarios();
        let mut p = build_sequence(Some(list.clone())).unwrap();
        p.advance();
        let out = p.to_list();
        assert_eq!(out.len(), list.len());
        for (a, b) in out.iter().zip(&list) {
            assert!(Arc::ptr_eq(a, b));
        }
    }
}
