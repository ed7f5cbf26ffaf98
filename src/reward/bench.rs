// src/reward/bench.rs
use serde::{Deserialize, Serialize};

/// Execution measurements for one reference query: one time per
/// 3-relation join order, indexed 0..=2. Owned by the caller and
/// read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchedQuery {
    pub execution_times: [f64; 3],
}

impl BenchedQuery {
    pub fn new(execution_times: [f64; 3]) -> Self {
        Self { execution_times }
    }

    pub fn execution_time(&self, order: usize) -> Option<f64> {
        self.execution_times.get(order).copied()
    }

    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Global execution-time range over a set of benched queries, used to
/// normalize rewards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkBounds {
    pub min_exec_t: f64,
    pub max_exec_t: f64,
}

impl BenchmarkBounds {
    pub fn new(min_exec_t: f64, max_exec_t: f64) -> Self {
        Self {
            min_exec_t,
            max_exec_t,
        }
    }

    /// Derive the range from a reference set. `None` for an empty set.
    pub fn from_queries(queries: &[BenchedQuery]) -> Option<Self> {
        let mut times = queries
            .iter()
            .flat_map(|q| q.execution_times.iter().copied());
        let first = times.next()?;
        let mut bounds = Self::new(first, first);
        for t in times {
            bounds.min_exec_t = bounds.min_exec_t.min(t);
            bounds.max_exec_t = bounds.max_exec_t.max(t);
        }
        Some(bounds)
    }

    pub fn span(&self) -> f64 {
        self.max_exec_t - self.min_exec_t
    }
}
