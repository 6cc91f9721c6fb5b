//! Hook decision logic
//!
//! One module per host lifecycle event. Decisions are plain values;
//! translating them to process exit codes is the binaries' job.

mod context_hints;
mod protect_files;

pub use context_hints::{HintOutcome, collect_hints};
pub use protect_files::{EXIT_BLOCK, PathCheckResult, PathDecision, check_path};
