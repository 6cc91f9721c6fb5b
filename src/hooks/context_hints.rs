//! UserPromptSubmit hook: keyword-triggered command suggestions
//!
//! Scans the submitted prompt for fixed keyword groups and suggests the
//! matching slash commands. Purely advisory: the hook never blocks and
//! never signals failure to the host.

/// A keyword group and the suggestion it triggers
struct HintRule {
    /// Lowercase trigger words, matched as substrings of the prompt
    triggers: &'static [&'static str],
    /// Suggestion emitted when any trigger matches
    hint: &'static str,
}

/// Keyword groups in declaration order; hints are emitted in this order
/// regardless of where the triggers occur in the prompt.
const HINT_RULES: [HintRule; 3] = [
    HintRule {
        triggers: &["test", "e2e", "playwright"],
        hint: "Consider running /e2e for full E2E test suite",
    },
    HintRule {
        triggers: &["review", "pr", "check"],
        hint: "Consider running /review for comprehensive code review",
    },
    HintRule {
        triggers: &["security", "vuln", "safe"],
        hint: "Consider running /security for security audit",
    },
];

/// Separator between hints on the single output line
const HINT_SEPARATOR: &str = " | ";

/// Result of scanning one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// No keyword group matched; the hook writes nothing
    Silent,
    /// At least one group matched, in group-declaration order
    Hints(Vec<&'static str>),
}

impl HintOutcome {
    /// Scan a prompt and collect the matching hints.
    ///
    /// Matching is case-insensitive: the prompt is lowercased once and
    /// the triggers are already lowercase.
    pub fn from_prompt(prompt: &str) -> Self {
        let hints = collect_hints(prompt);
        if hints.is_empty() {
            HintOutcome::Silent
        } else {
            HintOutcome::Hints(hints)
        }
    }

    /// Render the output line, if there is anything to say.
    pub fn render(&self) -> Option<String> {
        match self {
            HintOutcome::Silent => None,
            HintOutcome::Hints(hints) => Some(hints.join(HINT_SEPARATOR)),
        }
    }
}

/// Collect the hints whose keyword group matches the prompt.
///
/// A group matches when ANY of its triggers appears as a substring of
/// the lowercased prompt.
pub fn collect_hints(prompt: &str) -> Vec<&'static str> {
    let prompt = prompt.to_lowercase();

    HINT_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|word| prompt.contains(word)))
        .map(|rule| rule.hint)
        .collect()
}
