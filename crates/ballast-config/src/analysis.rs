//! Overload analysis configuration.

use serde::{Deserialize, Serialize};

/// Default overload percentile.
const fn default_percentile() -> f64 {
    75.0
}

/// Default snapshot file, relative to the working directory.
fn default_snapshot_path() -> String {
    "ballast.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Users scoring strictly above this percentile of the team are overloaded.
    #[serde(default = "default_percentile")]
    pub percentile: f64,

    /// Path of the JSON snapshot holding the input tables.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            percentile: default_percentile(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl AnalysisConfig {
    /// Check if the percentile lies in `[0, 100]`.
    pub fn has_valid_percentile(&self) -> bool {
        self.percentile.is_finite() && (0.0..=100.0).contains(&self.percentile)
    }
}
