//! Percentile thresholding of the workload table.

use ballast_core::entities::Task;
use ballast_core::errors::CoreError;
use ballast_core::responses::{OverloadPartition, OverloadedUserDetail, WorkloadEntry};

use crate::stats;

/// Split `entries` at the `percentile`-th workload score.
///
/// An entry is overloaded only when its score is strictly greater than the
/// threshold, so a single user, or a team with identical scores, never has
/// anyone overloaded. An empty table yields a threshold of `0.0`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `percentile` is not a finite
/// number in `[0, 100]`.
pub fn detect_overloaded(
    entries: &[WorkloadEntry],
    percentile: f64,
) -> Result<OverloadPartition, CoreError> {
    validate_percentile(percentile)?;

    let scores: Vec<f64> = entries.iter().map(|entry| entry.workload_score).collect();
    let threshold = stats::quantile(&scores, percentile / 100.0).unwrap_or(0.0);

    let overloaded: Vec<WorkloadEntry> = entries
        .iter()
        .filter(|entry| entry.workload_score > threshold)
        .cloned()
        .collect();

    tracing::debug!(
        percentile,
        threshold,
        overloaded = overloaded.len(),
        total = entries.len(),
        "partitioned workload table"
    );

    Ok(OverloadPartition {
        overloaded,
        threshold,
    })
}

/// Check that `percentile` lies in `[0, 100]`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] otherwise, including for NaN.
pub fn validate_percentile(percentile: f64) -> Result<(), CoreError> {
    if percentile.is_finite() && (0.0..=100.0).contains(&percentile) {
        Ok(())
    } else {
        Err(CoreError::invalid_argument(
            "percentile",
            format!("must be between 0 and 100, got {percentile}"),
        ))
    }
}

/// Overloaded users sorted busiest first. Ties keep their table order.
#[must_use]
pub fn rank_overloaded(partition: &OverloadPartition) -> Vec<WorkloadEntry> {
    let mut ranked = partition.overloaded.clone();
    ranked.sort_by(|a, b| b.workload_score.total_cmp(&a.workload_score));
    ranked
}

/// Attach each overloaded user's outstanding tasks, earliest due first.
#[must_use]
pub fn overload_report(overloaded: &[WorkloadEntry], tasks: &[Task]) -> Vec<OverloadedUserDetail> {
    overloaded
        .iter()
        .map(|entry| {
            let mut pending: Vec<Task> = tasks
                .iter()
                .filter(|task| task.assigned_user_id == entry.user_id && task.is_pending())
                .cloned()
                .collect();
            pending.sort_by_key(|task| task.due_date);
            OverloadedUserDetail {
                entry: entry.clone(),
                pending,
            }
        })
        .collect()
}
