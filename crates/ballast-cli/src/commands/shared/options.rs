use ballast_balance::{AnalysisOptions, ScoreWeights};
use ballast_config::{BallastConfig, ScoringConfig};

/// Score weights from the `[scoring]` section.
#[must_use]
pub const fn score_weights(scoring: &ScoringConfig) -> ScoreWeights {
    ScoreWeights {
        pending_weight: scoring.pending_weight,
        assigned_weight: scoring.assigned_weight,
        minutes_per_unit: scoring.minutes_per_unit,
    }
}

/// Analysis options from config, with an optional `--percentile` override.
///
/// The override is not range-checked here; `analyze` and
/// `detect_overloaded` reject it with a typed error.
#[must_use]
pub fn analysis_options(config: &BallastConfig, percentile: Option<f64>) -> AnalysisOptions {
    AnalysisOptions {
        percentile: percentile.unwrap_or(config.analysis.percentile),
        weights: score_weights(&config.scoring),
    }
}
