//! # ballast-config
//!
//! Layered configuration loading for Ballast using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BALLAST_*` prefix, `__` as separator)
//! 2. Project-level `.ballast/config.toml`
//! 3. User-level `~/.config/ballast/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BALLAST_ANALYSIS__PERCENTILE` -> `analysis.percentile`,
//! `BALLAST_REMINDERS__LEAD_HOURS` -> `reminders.lead_hours`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ballast_config::BallastConfig;
//!
//! let config = BallastConfig::load_with_dotenv().expect("config");
//! println!("overload percentile: {}", config.analysis.percentile);
//! ```

mod analysis;
mod error;
mod general;
mod reminders;
mod scoring;

pub use analysis::AnalysisConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use reminders::ReminderConfig;
pub use scoring::ScoringConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BallastConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub reminders: ReminderConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BallastConfig {
    /// Load and validate configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse and
    /// [`ConfigError::InvalidValue`] if a merged value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".ballast/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("BALLAST_").split("__"))
    }

    /// Check merged values against their accepted ranges.
    ///
    /// The `[scoring]` rules and wording match `ScoreWeights::validate` in
    /// `ballast-balance`, which re-checks weights when an analysis runs; a bad
    /// file or env value is reported here first, naming its config key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.analysis.has_valid_percentile() {
            return Err(invalid(
                "analysis.percentile",
                format!("must be between 0 and 100, got {}", self.analysis.percentile),
            ));
        }

        for (field, value) in [
            ("scoring.pending_weight", self.scoring.pending_weight),
            ("scoring.assigned_weight", self.scoring.assigned_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        if !self.scoring.minutes_per_unit.is_finite() || self.scoring.minutes_per_unit <= 0.0 {
            return Err(invalid(
                "scoring.minutes_per_unit",
                format!(
                    "must be greater than zero, got {}",
                    self.scoring.minutes_per_unit
                ),
            ));
        }

        if self.reminders.lead_hours < 0 {
            return Err(invalid(
                "reminders.lead_hours",
                format!("must be non-negative, got {}", self.reminders.lead_hours),
            ));
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ballast").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}
