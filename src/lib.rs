//! Claude Code lifecycle hooks
//!
//! Native-binary hooks for Claude Code, communicating with the host over
//! stdin/stdout/stderr and exit codes:
//!
//! - `context-hints` (UserPromptSubmit): scans the submitted prompt for
//!   keyword groups and prints slash-command suggestions to stdout.
//! - `protect-files` (PreToolUse): blocks file modifications whose path
//!   touches a protected fragment, by exiting with code 2.
//!
//! Each invocation reads one complete JSON payload from stdin. A payload
//! that fails to decode is treated as a normal condition: the hook stays
//! silent and reports success, never an error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use claude_hooks::{HintOutcome, PromptSubmitEvent, decode_event};
//!
//! if let Some(event) = decode_event::<PromptSubmitEvent>(std::io::stdin().lock()) {
//!     if let Some(line) = HintOutcome::from_prompt(&event.prompt).render() {
//!         println!("{line}");
//!     }
//! }
//! ```
//!
//! Decision logic is process-exit-free; only the binaries translate a
//! decision into an exit status.

pub mod hooks;
pub mod logging;
pub mod types;

pub use hooks::{
    EXIT_BLOCK, HintOutcome, PathCheckResult, PathDecision, check_path, collect_hints,
};
pub use types::{HookError, PreToolUseEvent, PromptSubmitEvent, Result, ToolInput, decode_event};
