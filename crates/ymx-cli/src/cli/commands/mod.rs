//! CLI command handlers. Each command is in its own file for clarity.

mod all;
mod batch;
mod cancel;
mod delete;
mod downloads;
mod external;
mod fetch;
mod get;
mod save;
mod session;

pub use all::run_all;
pub use batch::run_batch;
pub use cancel::run_cancel;
pub use delete::run_delete;
pub use downloads::run_downloads;
pub use external::run_external;
pub use fetch::run_fetch;
pub use get::run_get;
pub use save::run_save;
