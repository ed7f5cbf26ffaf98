//! The search environment state: observation grid, action catalogue and
//! the episode facade that advances grid and join plan in lockstep.

pub mod action;
pub mod grid;

pub use action::{ActionSpace, JoinAction};
pub use grid::{Cell, ObservationGrid};

use crate::plan::JoinPlan;
use crate::query::ParsedQuery;
use thiserror::Error;

/// Errors raised when an action cannot be applied to the current grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("row {row} is out of bounds for a grid of side {side}")]
    OutOfBounds { row: usize, side: usize },

    #[error("row {0} is already empty")]
    EmptyRow(usize),

    #[error("rows {0} and {1} are not join candidates")]
    NotJoinable(usize, usize),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// One search episode over one query.
///
/// The grid and the join plan are created together and every applied
/// action mutates both, so the plan always describes exactly the joins
/// the grid has absorbed. Discard the episode when `is_done` turns true
/// and the plan has been read out.
#[derive(Debug, Clone)]
pub struct Episode {
    grid: ObservationGrid,
    plan: JoinPlan,
    actions: ActionSpace,
    /// Where each original row's content currently lives. Identity until
    /// the row is merged away.
    home: Vec<usize>,
}

impl Episode {
    pub fn new(query: &ParsedQuery) -> Self {
        Self {
            grid: ObservationGrid::from_query(query),
            plan: JoinPlan::new(),
            actions: ActionSpace::new(query.len()),
            home: (0..query.len()).collect(),
        }
    }

    pub fn grid(&self) -> &ObservationGrid {
        &self.grid
    }

    pub fn plan(&self) -> &JoinPlan {
        &self.plan
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.actions
    }

    /// All joinable pairs have been resolved; nothing is left to do.
    pub fn is_done(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Validate and apply a join: merge the higher row into the lower one
    /// and record the step in the plan.
    pub fn apply(&mut self, action: JoinAction) -> ActionResult<()> {
        self.validate(action)?;
        let a = action.left.min(action.right);
        let b = action.left.max(action.right);
        self.grid.merge_rows(a, b);
        self.plan.record(a, b);
        for slot in &mut self.home {
            if *slot == b {
                *slot = a;
            }
        }
        Ok(())
    }

    fn validate(&self, action: JoinAction) -> ActionResult<()> {
        let side = self.grid.side();
        for row in [action.left, action.right] {
            if row >= side {
                return Err(ActionError::OutOfBounds { row, side });
            }
        }
        for row in [action.left, action.right] {
            if self.grid.is_row_empty(row) {
                return Err(ActionError::EmptyRow(row));
            }
        }
        if action.left == action.right || !self.joinable(action.left, action.right) {
            return Err(ActionError::NotJoinable(action.left, action.right));
        }
        Ok(())
    }

    /// Two live rows are joinable while a pending marker links their
    /// groups. A marker at (r, c) links row r with whichever live row
    /// holds original row c's content now.
    fn joinable(&self, x: usize, y: usize) -> bool {
        let side = self.grid.side();
        for row in 0..side {
            for col in 0..side {
                if self.grid.cell(row, col).is_marker() {
                    let linked = self.home[col];
                    if (row == x && linked == y) || (row == y && linked == x) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// The plan in its wire form.
    pub fn serialized_plan(&self) -> String {
        self.plan.serialize()
    }
}
