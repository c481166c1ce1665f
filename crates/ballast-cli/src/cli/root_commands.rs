use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Per-user workload table.
    Workload(WorkloadArgs),
    /// Users above the overload threshold, with their pending tasks.
    Overloaded(PercentileArgs),
    /// Suggest task handoffs away from overloaded users.
    Rebalance(PercentileArgs),
    /// Due-date reminders that should go out now.
    Reminders(RemindersArgs),
    /// Full analysis: workload, overload detail, and suggestions.
    Report(PercentileArgs),
    /// Dump JSON schema for a snapshot or response type.
    Schema(SchemaArgs),
}

/// Arguments for `ballast workload`.
#[derive(Clone, Debug, Args)]
pub struct WorkloadArgs {
    /// Only users with at least one task, busiest first.
    #[arg(long)]
    pub active: bool,
}

/// Arguments shared by the threshold-based commands.
#[derive(Clone, Debug, Args)]
pub struct PercentileArgs {
    /// Overload percentile in [0, 100] (defaults to `analysis.percentile`).
    #[arg(long)]
    pub percentile: Option<f64>,
}

/// Arguments for `ballast reminders`.
#[derive(Clone, Debug, Args)]
pub struct RemindersArgs {
    /// Evaluation time as RFC 3339 (defaults to the current time).
    #[arg(long)]
    pub now: Option<String>,
    /// Hours before the due date to remind (defaults to `reminders.lead_hours`).
    #[arg(long)]
    pub lead_hours: Option<i64>,
}

/// Arguments for `ballast schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Types with a published JSON schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Snapshot,
    WorkloadEntry,
    Suggestion,
    Report,
}
