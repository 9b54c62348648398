// ============================================================================
// Nav Core - Layout Mode
// File: crates/nav-core/src/state/layout.rs
// Description: Full-label vs icon-only display mode for the surface
// ============================================================================

use serde::{Deserialize, Serialize};

/// Display mode of the navigation surface. Independent of [`ExpansionState`]:
/// collapsing the layout hides labels and children without clearing which
/// groups are expanded.
///
/// [`ExpansionState`]: super::ExpansionState
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Expanded,
    Collapsed,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Expanded => LayoutMode::Collapsed,
            LayoutMode::Collapsed => LayoutMode::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, LayoutMode::Collapsed)
    }
}
