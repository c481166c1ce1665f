use std::path::PathBuf;

use ballast_config::BallastConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, including a `.env` file if one is found.
pub fn load_config() -> anyhow::Result<BallastConfig> {
    BallastConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// Snapshot location: `--snapshot` wins over `analysis.snapshot_path`.
#[must_use]
pub fn snapshot_path(flags: &GlobalFlags, config: &BallastConfig) -> PathBuf {
    flags
        .snapshot
        .as_deref()
        .map_or_else(|| PathBuf::from(&config.analysis.snapshot_path), PathBuf::from)
}
