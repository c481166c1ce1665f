use ballast_balance::{compute_workload_with, detect_overloaded, overload_report, rank_overloaded};
use ballast_core::responses::OverloadedUserDetail;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PercentileArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::options::analysis_options;
use crate::context::AppContext;
use crate::output::output;

/// Response from `ballast overloaded`.
#[derive(Debug, Serialize)]
struct OverloadedResponse {
    percentile: f64,
    threshold: f64,
    overloaded: Vec<OverloadedUserDetail>,
}

/// Handle `ballast overloaded`.
pub fn handle(args: &PercentileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.default_limit());
    let response = overloaded_users(args, ctx, limit)?;
    output(&response, flags.format)
}

fn overloaded_users(
    args: &PercentileArgs,
    ctx: &AppContext,
    limit: usize,
) -> anyhow::Result<OverloadedResponse> {
    let options = analysis_options(&ctx.config, args.percentile);
    options.validate()?;

    let snapshot = &ctx.snapshot;
    let entries = compute_workload_with(
        &options.weights,
        &snapshot.users,
        &snapshot.tasks,
        &snapshot.time_logs,
    );
    let partition = detect_overloaded(&entries, options.percentile)?;

    let mut ranked = rank_overloaded(&partition);
    ranked.truncate(limit);

    Ok(OverloadedResponse {
        percentile: options.percentile,
        threshold: partition.threshold,
        overloaded: overload_report(&ranked, &snapshot.tasks),
    })
}
