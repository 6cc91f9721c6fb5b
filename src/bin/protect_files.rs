//! PreToolUse hook binary
//!
//! Reads the event payload from stdin and checks the target path
//! against the protected fragments. Exits 2 to deny the operation,
//! 0 to allow; the diagnostic line goes to stderr on the deny path
//! only.

use claude_hooks::{PathDecision, PreToolUseEvent, check_path, decode_event, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    // Malformed input must never itself block an operation.
    let Some(event) = decode_event::<PreToolUseEvent>(std::io::stdin().lock()) else {
        return Ok(());
    };

    let path = &event.tool_input.file_path;
    let result = check_path(path);

    tracing::debug!(
        tool_name = %event.tool_name,
        session_id = %event.session_id,
        file_path = %path,
        decision = ?result.decision,
        fragment = ?result.fragment,
        "path guard decision"
    );

    if result.decision == PathDecision::Deny {
        eprintln!("Blocked: Cannot modify protected file: {path}");
        std::process::exit(result.exit_code());
    }

    Ok(())
}
