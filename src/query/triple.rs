// src/query/triple.rs
use serde::{Deserialize, Serialize};

/// A triple pattern: subject, predicate and object as plain integers.
///
/// Non-negative components identify constants. Negative components are
/// join variables, shared across the patterns of a query that must bind
/// to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: i64,
    pub predicate: i64,
    pub object: i64,
}

impl Triple {
    pub fn new(subject: i64, predicate: i64, object: i64) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    pub fn components(&self) -> [i64; 3] {
        [self.subject, self.predicate, self.object]
    }

    pub fn contains(&self, value: i64) -> bool {
        self.components().contains(&value)
    }

    /// The join variables of this pattern, in component order.
    pub fn join_variables(&self) -> impl Iterator<Item = i64> {
        self.components().into_iter().filter(|c| *c < 0)
    }

    /// Two patterns are join candidates of each other when they share at
    /// least one join variable.
    pub fn shares_variable(&self, other: &Triple) -> bool {
        self.join_variables().any(|v| other.contains(v))
    }
}
