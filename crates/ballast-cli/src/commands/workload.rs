use ballast_balance::{active_entries, compute_workload_with};
use ballast_core::responses::WorkloadEntry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WorkloadArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::options::score_weights;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ballast workload`.
pub fn handle(args: &WorkloadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.default_limit());
    let entries = workload_rows(args, ctx, limit);
    output(&entries, flags.format)
}

fn workload_rows(args: &WorkloadArgs, ctx: &AppContext, limit: usize) -> Vec<WorkloadEntry> {
    let snapshot = &ctx.snapshot;
    let entries = compute_workload_with(
        &score_weights(&ctx.config.scoring),
        &snapshot.users,
        &snapshot.tasks,
        &snapshot.time_logs,
    );

    let mut rows = if args.active {
        active_entries(&entries)
    } else {
        entries
    };
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::fixtures::team_context;

    fn ids(rows: &[WorkloadEntry]) -> Vec<u64> {
        rows.iter().map(|row| row.user_id).collect()
    }

    #[test]
    fn full_table_keeps_user_order() {
        let rows = workload_rows(&WorkloadArgs { active: false }, &team_context(), 20);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4]);
        assert!((rows[0].workload_score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn active_view_drops_idle_users_and_sorts_by_score() {
        let rows = workload_rows(&WorkloadArgs { active: true }, &team_context(), 20);
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn limit_truncates_rows() {
        let rows = workload_rows(&WorkloadArgs { active: false }, &team_context(), 2);
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn configured_weights_change_scores() {
        let mut ctx = team_context();
        ctx.config.scoring.pending_weight = 0.0;
        let rows = workload_rows(&WorkloadArgs { active: false }, &ctx, 20);
        // Linus: two assigned tasks, no pending weight, no logged time.
        assert!((rows[2].workload_score - 2.0).abs() < 1e-9);
    }
}
