//! Reward computation for completed 3-relation join plans.
//!
//! Scoring is fixed at three relations: a benched query carries one
//! execution time per possible join order, and the plan's first join
//! selects which of the three was produced. Wider queries are not
//! scoreable and surface [`RewardError::UnknownJoinOrder`].

pub mod bench;

pub use bench::{BenchedQuery, BenchmarkBounds};

use crate::plan::{JoinPlan, NodeId};
use thiserror::Error;

/// Errors raised while scoring a completed plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RewardError {
    #[error("plan records no joins")]
    EmptyPlan,

    #[error("first join of {left} and {right} does not match a 3-relation join order")]
    UnknownJoinOrder { left: i64, right: i64 },

    #[error("join order index {0} has no benchmarked execution time")]
    OrderOutOfRange(usize),

    #[error("degenerate benchmark range: max {max_exec_t} does not exceed min {min_exec_t}")]
    DegenerateBenchmark { min_exec_t: f64, max_exec_t: f64 },
}

pub type RewardResult<T> = Result<T, RewardError>;

/// Which of the three 3-relation join orders a plan denotes, as an index
/// into a benched query's execution times.
///
/// The pair merged first fixes the order: rows 0 and 1 first is order 0,
/// rows 0 and 2 is order 1, rows 1 and 2 is order 2.
pub fn order_index(plan: &JoinPlan) -> RewardResult<usize> {
    let first = plan.first().ok_or(RewardError::EmptyPlan)?;
    match first {
        [NodeId::Row(0), NodeId::Row(1)] => Ok(0),
        [NodeId::Row(0), NodeId::Row(2)] => Ok(1),
        [NodeId::Row(1), NodeId::Row(2)] => Ok(2),
        [left, right] => Err(RewardError::UnknownJoinOrder {
            left: left.as_i64(),
            right: right.as_i64(),
        }),
    }
}

/// Score one join order against benchmarked execution times.
///
/// `reward = -(sqrt(|t - max|) / sqrt(max - min)) * 10` where `t` is the
/// chosen order's execution time. The reward is a penalty whose magnitude
/// shrinks as `t` approaches the benchmarked maximum; times near the
/// minimum score most negative.
pub fn reward(
    order: usize,
    benched: &BenchedQuery,
    bounds: &BenchmarkBounds,
) -> RewardResult<f64> {
    if bounds.span() <= 0.0 {
        return Err(RewardError::DegenerateBenchmark {
            min_exec_t: bounds.min_exec_t,
            max_exec_t: bounds.max_exec_t,
        });
    }
    let t = benched
        .execution_time(order)
        .ok_or(RewardError::OrderOutOfRange(order))?;
    Ok(-((t - bounds.max_exec_t).abs().sqrt() / bounds.span().sqrt() * 10.0))
}
