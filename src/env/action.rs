// src/env/action.rs
use serde::{Deserialize, Serialize};

/// A pairwise join of two grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinAction {
    pub left: usize,
    pub right: usize,
}

impl JoinAction {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// The fixed catalogue of joins for a grid of side `n`, in row-major
/// upper-triangular order:
/// (0,1),(0,2),...,(0,n-1),(1,2),...,(n-2,n-1).
///
/// Joins always land in the lower-indexed row, so only pairs with
/// `left < right` are enumerated; that halves the catalogue and removes
/// left/right symmetry from the search. Agents address actions by flat
/// index. Whether an entry is currently valid (both rows live and
/// actually candidates) is an episode-time property, not a catalogue
/// property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpace {
    actions: Vec<JoinAction>,
}

impl ActionSpace {
    pub fn new(n: usize) -> Self {
        let mut actions = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in i + 1..n {
                actions.push(JoinAction::new(i, j));
            }
        }
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Resolve a flat agent-chosen index to its row pair.
    pub fn get(&self, index: usize) -> Option<JoinAction> {
        self.actions.get(index).copied()
    }

    pub fn actions(&self) -> &[JoinAction] {
        &self.actions
    }
}
