/*!
 * rper - recursively change permissions of directories and/or files
 *
 * Walks a directory tree and rewrites POSIX permission bits to an octal
 * target, with `*` wildcards that preserve individual permission groups
 * (`6*4` sets user and other but keeps group).
 */

pub mod config;
pub mod error;
pub mod mode;
pub mod summary;
pub mod walker;


// Re-export main components for easier access
pub use config::{Args, Config, OutputMode, SymlinkMode};
pub use error::{Result, RperError};
pub use mode::{ModeSlot, ModeSpec};
pub use summary::{ReportFormat, Reporter, RunSummary};
pub use walker::Walker;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
