//! Entity structs for the Ballast input tables.
//!
//! Every entity is an immutable value record keyed by a plain integer id.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so that a
//! snapshot file can be validated and round-tripped.

mod dependency;
mod notification;
mod task;
mod time_log;
mod user;

pub use dependency::Dependency;
pub use notification::Notification;
pub use task::Task;
pub use time_log::TimeLog;
pub use user::User;
