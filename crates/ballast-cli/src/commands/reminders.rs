use anyhow::{Context, bail};
use ballast_balance::due_reminders;
use ballast_core::entities::Notification;
use chrono::{DateTime, Duration, Utc};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RemindersArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ballast reminders`.
pub fn handle(args: &RemindersArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = parse_now(args.now.as_deref())?;
    let limit = effective_limit(flags.limit, ctx.default_limit());
    let reminders = reminders_at(args, ctx, now, limit)?;
    output(&reminders, flags.format)
}

fn reminders_at(
    args: &RemindersArgs,
    ctx: &AppContext,
    now: DateTime<Utc>,
    limit: usize,
) -> anyhow::Result<Vec<Notification>> {
    let lead_hours = args.lead_hours.unwrap_or(ctx.config.reminders.lead_hours);
    if lead_hours < 0 {
        bail!("invalid --lead-hours '{lead_hours}': must be non-negative");
    }
    let lead = Duration::try_hours(lead_hours)
        .with_context(|| format!("invalid --lead-hours '{lead_hours}': out of range"))?;

    let mut reminders = due_reminders(&ctx.snapshot.tasks, &ctx.snapshot.notifications, now, lead);
    reminders.truncate(limit);
    Ok(reminders)
}

fn parse_now(raw: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    let Some(raw) = raw else {
        return Ok(Utc::now());
    };
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .with_context(|| format!("invalid --now '{raw}': expected RFC 3339"))
}
