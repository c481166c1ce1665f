use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use ballast_config::BallastConfig;
use ballast_core::snapshot::Snapshot;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::context::load_snapshot;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BallastConfig,
    pub snapshot: Snapshot,
    pub snapshot_path: PathBuf,
}

impl AppContext {
    /// Resolve the snapshot location and load it.
    pub fn init(config: BallastConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let snapshot_path = bootstrap::snapshot_path(flags, &config);
        let snapshot = load_snapshot(&snapshot_path)
            .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))?;

        tracing::debug!(
            path = %snapshot_path.display(),
            users = snapshot.users.len(),
            tasks = snapshot.tasks.len(),
            time_logs = snapshot.time_logs.len(),
            "loaded snapshot"
        );

        warn_dangling_references(&snapshot);

        Ok(Self {
            config,
            snapshot,
            snapshot_path,
        })
    }

    /// Row cap for list output: `--limit` or `general.default_limit`.
    #[must_use]
    pub fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }

    #[cfg(test)]
    pub fn from_parts(config: BallastConfig, snapshot: Snapshot) -> Self {
        Self {
            config,
            snapshot,
            snapshot_path: PathBuf::from("in-memory.json"),
        }
    }
}

/// Records pointing at ids missing from the snapshot.
#[derive(Debug, Default, PartialEq, Eq)]
struct DanglingReferences {
    /// Tasks owned by an unknown user; left out of every workload entry.
    unowned_tasks: usize,
    /// Dependencies on an unknown task; they block their dependent task.
    unknown_prerequisites: usize,
}

fn dangling_references(snapshot: &Snapshot) -> DanglingReferences {
    let user_ids: HashSet<_> = snapshot.users.iter().map(|u| u.user_id).collect();
    let task_ids: HashSet<_> = snapshot.tasks.iter().map(|t| t.task_id).collect();

    DanglingReferences {
        unowned_tasks: snapshot
            .tasks
            .iter()
            .filter(|t| !user_ids.contains(&t.assigned_user_id))
            .count(),
        unknown_prerequisites: snapshot
            .dependencies
            .iter()
            .filter(|d| !task_ids.contains(&d.depends_on_task_id))
            .count(),
    }
}

fn warn_dangling_references(snapshot: &Snapshot) {
    let dangling = dangling_references(snapshot);
    if dangling.unowned_tasks > 0 {
        tracing::warn!(
            count = dangling.unowned_tasks,
            "tasks assigned to unknown users are excluded from workload scores"
        );
    }
    if dangling.unknown_prerequisites > 0 {
        tracing::warn!(
            count = dangling.unknown_prerequisites,
            "dependencies on unknown tasks block their dependents from handoff"
        );
    }
}
