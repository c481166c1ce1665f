use ballast_balance::analyze;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PercentileArgs;
use crate::commands::shared::options::analysis_options;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ballast report`.
pub fn handle(args: &PercentileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = analysis_options(&ctx.config, args.percentile);
    let report = analyze(&ctx.snapshot, &options)?;

    tracing::debug!(
        snapshot = %ctx.snapshot_path.display(),
        overloaded = report.overloaded.len(),
        suggestions = report.suggestions.len(),
        "analysis complete"
    );

    output(&report, flags.format)
}
