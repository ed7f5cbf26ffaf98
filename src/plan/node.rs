// src/plan/node.rs
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifies a node in the join forest: an original grid row (leaf) or
/// the k-th join performed (internal). On the wire a leaf is its row
/// index and the k-th join is the negative integer -k, so the two id
/// spaces never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Row(usize),
    Join(usize),
}

impl NodeId {
    /// The id as the signed integer used on the wire.
    pub fn as_i64(&self) -> i64 {
        match self {
            NodeId::Row(row) => *row as i64,
            NodeId::Join(k) => -(*k as i64),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse()?;
        if value < 0 {
            Ok(NodeId::Join(-value as usize))
        } else {
            Ok(NodeId::Row(value as usize))
        }
    }
}
