//! UserPromptSubmit hook binary
//!
//! Reads the event payload from stdin and prints slash-command
//! suggestions to stdout. Always exits 0: this hook never signals
//! failure to the host.

use std::io::Write;

use claude_hooks::{HintOutcome, PromptSubmitEvent, decode_event, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    // Absent or garbled input is a normal condition: say nothing.
    let Some(event) = decode_event::<PromptSubmitEvent>(std::io::stdin().lock()) else {
        return Ok(());
    };

    tracing::debug!(
        session_id = %event.session_id,
        cwd = %event.cwd,
        prompt_len = event.prompt.len(),
        "prompt submitted"
    );

    if let Some(line) = HintOutcome::from_prompt(&event.prompt).render() {
        writeln!(std::io::stdout().lock(), "{line}")?;
    }

    Ok(())
}
