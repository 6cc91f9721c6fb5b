//! Hook event payloads
//!
//! Typed records for the JSON the host delivers on stdin. Every field is
//! optional: a missing key decodes to its default value rather than
//! failing, and unknown keys are ignored. Envelope fields (`session_id`,
//! `cwd`, `hook_event_name`) are carried for diagnostics only and never
//! influence a decision.

use std::io::Read;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::types::Result;

/// Input JSON for the UserPromptSubmit event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptSubmitEvent {
    /// The prompt text the user submitted
    #[serde(default)]
    pub prompt: String,

    #[serde(default)]
    pub session_id: String,

    #[serde(default)]
    pub cwd: String,

    #[serde(default)]
    pub hook_event_name: String,
}

/// Input JSON for the PreToolUse event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreToolUseEvent {
    /// Arguments of the tool call being evaluated
    #[serde(default)]
    pub tool_input: ToolInput,

    /// Tool name (e.g. "Write", "Edit")
    #[serde(default)]
    pub tool_name: String,

    #[serde(default)]
    pub session_id: String,

    #[serde(default)]
    pub cwd: String,

    #[serde(default)]
    pub hook_event_name: String,
}

/// Tool-call arguments relevant to the file guard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// Target path of the file operation
    #[serde(default)]
    pub file_path: String,
}

/// Read the complete input stream and decode one event payload.
///
/// Returns `None` when the stream is empty, unreadable, or not valid
/// JSON for `T`. That is the normal "nothing to do" outcome, not an
/// error: the caller degrades to its safe default (no hints / allow).
pub fn decode_event<T: DeserializeOwned>(reader: impl Read) -> Option<T> {
    match try_decode(reader) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring undecodable hook payload");
            None
        }
    }
}

fn try_decode<T: DeserializeOwned>(mut reader: impl Read) -> Result<T> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}
