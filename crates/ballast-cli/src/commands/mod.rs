pub mod dispatch;
pub mod overloaded;
pub mod rebalance;
pub mod reminders;
pub mod report;
pub mod schema;
pub mod shared;
pub mod workload;
