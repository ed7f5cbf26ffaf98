//! # Trellis
//!
//! Grid-encoded join-order search state for triple pattern queries.
//!
//! A query's join structure becomes a fixed-size numeric grid. A search
//! agent observes the grid and picks pairwise row-joins from a restricted
//! action catalogue; the engine replays each join on the grid while the
//! join plan accrues as a binary forest. A completed plan is scored
//! against externally benchmarked execution times.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           Query string "<s>,<p>,<o>;...;"               │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [query::parse]
//! ┌─────────────────────────────────────────────────────────┐
//! │      ParsedQuery (patterns + join candidates)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [env::Episode]
//! ┌─────────────────────────────────────────────────────────┐
//! │   ObservationGrid + JoinPlan, advanced in lockstep      │
//! │   (env::ActionSpace supplies the legal catalogue)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [reward]
//! ┌─────────────────────────────────────────────────────────┐
//! │   order_index + benchmarked times → scalar reward       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Training loops, policy learning and execution-time measurement live
//! outside this crate; they feed in a query string and benchmark data
//! and consume observations, plans and rewards.

pub mod env;
pub mod plan;
pub mod query;
pub mod reward;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::env::{
        ActionError, ActionResult, ActionSpace, Cell, Episode, JoinAction, ObservationGrid,
    };
    pub use crate::plan::{JoinPlan, NodeId, PlanEntry, PlanParseError};
    pub use crate::query::{parse, ParseError, ParsedQuery, QueryPattern, Triple};
    pub use crate::reward::{
        order_index, reward, BenchedQuery, BenchmarkBounds, RewardError, RewardResult,
    };
}

// Also export the main entry points at the crate root
pub use env::{Episode, JoinAction, ObservationGrid};
pub use plan::JoinPlan;
pub use query::{parse, ParsedQuery, Triple};
