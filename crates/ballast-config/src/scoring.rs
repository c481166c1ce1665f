//! Workload score weights.

use serde::{Deserialize, Serialize};

const fn default_pending_weight() -> f64 {
    3.0
}

const fn default_assigned_weight() -> f64 {
    1.0
}

const fn default_minutes_per_unit() -> f64 {
    60.0
}

/// `score = pending * pending_weight + assigned * assigned_weight + minutes / minutes_per_unit`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default = "default_pending_weight")]
    pub pending_weight: f64,

    #[serde(default = "default_assigned_weight")]
    pub assigned_weight: f64,

    /// Logged minutes worth one score point.
    #[serde(default = "default_minutes_per_unit")]
    pub minutes_per_unit: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pending_weight: default_pending_weight(),
            assigned_weight: default_assigned_weight(),
            minutes_per_unit: default_minutes_per_unit(),
        }
    }
}
