//! # ballast-balance
//!
//! Workload scoring and rebalancing for Ballast.
//!
//! Data flows one way through three stages, each a pure function over
//! borrowed input tables:
//! - [`compute_workload`] joins users, tasks, and time logs into one
//!   [`WorkloadEntry`](ballast_core::responses::WorkloadEntry) per user
//! - [`detect_overloaded`] thresholds the scores at a percentile
//! - [`plan_reallocation`] proposes at most one task handoff per overloaded user
//!
//! [`due_reminders`] schedules due-date reminders over the same tables, and
//! [`analyze`] runs the whole pipeline over a
//! [`Snapshot`](ballast_core::snapshot::Snapshot).

pub mod overload;
pub mod reallocation;
pub mod reminders;
pub mod report;
pub mod stats;
pub mod workload;

pub use overload::{detect_overloaded, overload_report, rank_overloaded};
pub use reallocation::plan_reallocation;
pub use reminders::due_reminders;
pub use report::{AnalysisOptions, analyze};
pub use workload::{ScoreWeights, active_entries, compute_workload, compute_workload_with};
