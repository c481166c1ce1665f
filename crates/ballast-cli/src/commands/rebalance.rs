use ballast_balance::analyze;
use ballast_core::responses::ReallocationSuggestion;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PercentileArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::options::analysis_options;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ballast rebalance`.
pub fn handle(args: &PercentileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.default_limit());
    let suggestions = suggestions(args, ctx, limit)?;
    if suggestions.is_empty() {
        tracing::info!("no reallocation suggestions for this snapshot");
    }
    output(&suggestions, flags.format)
}

fn suggestions(
    args: &PercentileArgs,
    ctx: &AppContext,
    limit: usize,
) -> anyhow::Result<Vec<ReallocationSuggestion>> {
    let options = analysis_options(&ctx.config, args.percentile);
    let mut suggestions = analyze(&ctx.snapshot, &options)?.suggestions;
    suggestions.truncate(limit);
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use ballast_core::entities::{Dependency, Notification};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::fixtures::team_context;

    #[test]
    fn moves_top_task_to_least_loaded_user() {
        let suggestions =
            suggestions(&PercentileArgs { percentile: None }, &team_context(), 20).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].task_id, 100);
        assert_eq!(suggestions[0].from_user_name, "Ada");
        assert_eq!(suggestions[0].to_user_name, "Mae");
    }

    #[test]
    fn reminded_task_is_left_alone() {
        let mut ctx = team_context();
        ctx.snapshot.notifications.push(Notification::reminder(1, 100));
        let suggestions = suggestions(&PercentileArgs { percentile: None }, &ctx, 20).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn unknown_prerequisite_blocks_handoff() {
        let mut ctx = team_context();
        ctx.snapshot.dependencies.push(Dependency {
            task_id: 100,
            depends_on_task_id: 999,
        });
        let suggestions = suggestions(&PercentileArgs { percentile: None }, &ctx, 20).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let suggestions =
            suggestions(&PercentileArgs { percentile: None }, &team_context(), 0).unwrap();
        assert!(suggestions.is_empty());
    }
}
