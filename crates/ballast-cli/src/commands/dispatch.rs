use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Workload(args) => commands::workload::handle(&args, ctx, flags),
        Commands::Overloaded(args) => commands::overloaded::handle(&args, ctx, flags),
        Commands::Rebalance(args) => commands::rebalance::handle(&args, ctx, flags),
        Commands::Reminders(args) => commands::reminders::handle(&args, ctx, flags),
        Commands::Report(args) => commands::report::handle(&args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
