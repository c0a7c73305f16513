//! CLI command handlers, one file per command.

mod completions;
mod decode;
mod format;
mod scan;
mod verify;

pub use completions::run_completions;
pub use decode::run_decode;
pub use format::run_format;
pub use scan::run_scan;
pub use verify::{run_verify, VerifyArgs};
