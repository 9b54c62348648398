// ============================================================================
// Nav Core - Expansion State
// File: crates/nav-core/src/state/expansion.rs
// Description: Set of currently-expanded group destination ids
// ============================================================================

use std::collections::HashSet;

/// Which groups are currently expanded. Toggles are independent per id:
/// expanding one group never collapses another (non-accordion).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric difference on a single id: member → remove, absent → add.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent_over_two_applications() {
        let mut state = ExpansionState::new();
        let before = state.clone();
        state.toggle("leave");
        assert!(state.is_expanded("leave"));
        state.toggle("leave");
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = ExpansionState::new();
        state.toggle("leave");
        state.toggle("payroll");
        assert!(state.is_expanded("leave"));
        assert!(state.is_expanded("payroll"));
        state.toggle("leave");
        assert!(!state.is_expanded("leave"));
        assert!(state.is_expanded("payroll"));
    }
}
