mod app_context;
mod snapshot_file;

pub use app_context::AppContext;
pub use snapshot_file::load_snapshot;
