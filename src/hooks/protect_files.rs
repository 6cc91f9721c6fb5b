//! PreToolUse hook: protected-file guard
//!
//! Denies file modifications whose target path contains a protected
//! fragment. The host reads exit code 2 as "deny this operation"; any
//! other exit code allows it.

/// Exit code the host interprets as "deny"
pub const EXIT_BLOCK: i32 = 2;

/// Path fragments that may never be modified.
///
/// Matched by plain substring containment anywhere in the path, so
/// `.env` also covers `.env.local`, and `node_modules/` matches
/// mid-path. Broad on purpose.
const PROTECTED_FRAGMENTS: [&str; 4] = [".env", "bun.lock", ".git/", "node_modules/"];

/// Guard decision for one tool call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDecision {
    /// The modification may proceed
    Allow,
    /// The modification targets a protected file
    Deny,
}

/// Result of a path check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCheckResult {
    /// The decision
    pub decision: PathDecision,
    /// The protected fragment that matched (deny only)
    pub fragment: Option<&'static str>,
}

impl PathCheckResult {
    /// Create a new allow result
    pub fn allow() -> Self {
        Self {
            decision: PathDecision::Allow,
            fragment: None,
        }
    }

    /// Create a new deny result
    pub fn deny(fragment: &'static str) -> Self {
        Self {
            decision: PathDecision::Deny,
            fragment: Some(fragment),
        }
    }

    /// The exit code the binary reports for this decision
    pub fn exit_code(&self) -> i32 {
        match self.decision {
            PathDecision::Allow => 0,
            PathDecision::Deny => EXIT_BLOCK,
        }
    }
}

/// Check a candidate path against the protected fragments.
///
/// Any-match test: the first fragment found is reported, but no
/// first-match-wins semantics are implied by the order.
pub fn check_path(path: &str) -> PathCheckResult {
    match PROTECTED_FRAGMENTS.iter().copied().find(|b| path.contains(b)) {
        Some(fragment) => PathCheckResult::deny(fragment),
        None => PathCheckResult::allow(),
    }
}
