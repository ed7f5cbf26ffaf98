// src/plan/tracker.rs
use crate::plan::node::NodeId;
use std::collections::HashMap;
use thiserror::Error;

/// One recorded join: the internal id and its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub id: NodeId,
    pub children: [NodeId; 2],
}

/// Errors raised while reading a serialized join plan back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanParseError {
    #[error("invalid plan entry '{0}': expected '<id>:<left>,<right>'")]
    InvalidEntry(String),

    #[error("invalid node id '{0}'")]
    InvalidNodeId(String),
}

/// The join plan: a binary forest over grid rows, built one join at a
/// time.
///
/// Joins are stored in the order they happened; the entry at position
/// k - 1 carries the internal id -k, so internal ids strictly decrease
/// and never collide with row ids. `reps` maps a row to the id currently
/// standing for everything merged into it. Only the surviving row's
/// mapping moves on a join; a merged-away row keeps its last mapping but
/// is never consulted again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinPlan {
    joins: Vec<[NodeId; 2]>,
    reps: HashMap<usize, NodeId>,
}

impl JoinPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    /// Record a join of two rows and return the new internal id.
    ///
    /// Both sides resolve through `reps` first, so a row that already
    /// took part in a join contributes its subtree rather than itself.
    pub fn record(&mut self, left: usize, right: usize) -> NodeId {
        let a = left.min(right);
        let b = left.max(right);
        let resolved = [self.representative(a), self.representative(b)];
        self.joins.push(resolved);
        let id = NodeId::Join(self.joins.len());
        self.reps.insert(a, id);
        id
    }

    /// The id currently standing for a row: the row itself until its
    /// first join, afterwards the most recent join it took part in.
    pub fn representative(&self, row: usize) -> NodeId {
        self.reps.get(&row).copied().unwrap_or(NodeId::Row(row))
    }

    pub fn entries(&self) -> impl Iterator<Item = PlanEntry> + '_ {
        self.joins
            .iter()
            .enumerate()
            .map(|(index, children)| PlanEntry {
                id: NodeId::Join(index + 1),
                children: *children,
            })
    }

    /// The pair recorded by the very first join, if any.
    pub fn first(&self) -> Option<[NodeId; 2]> {
        self.joins.first().copied()
    }

    /// The pair recorded by the most recent join, if any.
    pub fn last(&self) -> Option<[NodeId; 2]> {
        self.joins.last().copied()
    }

    /// Wire form: `<id>:<left>,<right>` per entry in insertion order,
    /// `;`-separated, no trailing separator.
    pub fn serialize(&self) -> String {
        let parts: Vec<String> = self
            .entries()
            .map(|entry| format!("{}:{},{}", entry.id, entry.children[0], entry.children[1]))
            .collect();
        parts.join(";")
    }

    /// Inverse of [`serialize`](Self::serialize).
    pub fn parse(input: &str) -> Result<Vec<PlanEntry>, PlanParseError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        input.split(';').map(parse_entry).collect()
    }
}

fn parse_entry(entry: &str) -> Result<PlanEntry, PlanParseError> {
    let invalid = || PlanParseError::InvalidEntry(entry.to_string());

    let (id, children) = entry.split_once(':').ok_or_else(invalid)?;
    let (left, right) = children.split_once(',').ok_or_else(invalid)?;

    Ok(PlanEntry {
        id: parse_node(id)?,
        children: [parse_node(left)?, parse_node(right)?],
    })
}

fn parse_node(token: &str) -> Result<NodeId, PlanParseError> {
    token
        .parse()
        .map_err(|_| PlanParseError::InvalidNodeId(token.to_string()))
}
