//! End-to-end analysis of one snapshot.

use ballast_core::errors::CoreError;
use ballast_core::responses::WorkloadReport;
use ballast_core::snapshot::Snapshot;

use crate::overload::{detect_overloaded, overload_report, rank_overloaded, validate_percentile};
use crate::reallocation::plan_reallocation;
use crate::workload::{ScoreWeights, compute_workload_with};

/// Default overload percentile.
pub const DEFAULT_PERCENTILE: f64 = 75.0;

/// Knobs for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Overload threshold percentile, in `[0, 100]`.
    pub percentile: f64,
    pub weights: ScoreWeights,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            percentile: DEFAULT_PERCENTILE,
            weights: ScoreWeights::default(),
        }
    }
}

impl AnalysisOptions {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] for an out-of-range percentile
    /// or invalid score weights.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_percentile(self.percentile)?;
        self.weights.validate()
    }
}

/// Run the full pipeline: workload table, overload partition, per-user
/// detail, and reallocation suggestions.
///
/// Overloaded users are handed to the planner busiest first.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `options` fail validation.
pub fn analyze(snapshot: &Snapshot, options: &AnalysisOptions) -> Result<WorkloadReport, CoreError> {
    options.validate()?;

    let entries = compute_workload_with(
        &options.weights,
        &snapshot.users,
        &snapshot.tasks,
        &snapshot.time_logs,
    );
    let partition = detect_overloaded(&entries, options.percentile)?;
    let ranked = rank_overloaded(&partition);

    let overloaded = overload_report(&ranked, &snapshot.tasks);
    let suggestions = plan_reallocation(
        &ranked,
        &entries,
        &snapshot.tasks,
        &snapshot.dependencies,
        &snapshot.notifications,
    );

    Ok(WorkloadReport {
        percentile: options.percentile,
        threshold: partition.threshold,
        entries,
        overloaded,
        suggestions,
    })
}
