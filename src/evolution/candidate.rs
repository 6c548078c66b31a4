//! Candidate representation for phrase evolution.

/// A candidate solution: one trial phrase plus the ancestry that produced it.
///
/// Candidates are immutable once created. Mutation never edits a candidate
/// in place; it builds a new one and records the parent text in the child's
/// history.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The trial phrase. Its length matches the target's for the whole run.
    pub text: String,
    /// Ancestor texts, oldest first. Diagnostic only: the algorithm never
    /// reads it. Retention is bounded by the `history_limit` configuration.
    pub history: Vec<String>,
}

impl Candidate {
    /// Create a generation-zero candidate with no ancestry.
    pub fn seed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            history: Vec::new(),
        }
    }

    /// Convergence test: exact text equality, ignoring history.
    pub fn matches(&self, target: &str) -> bool {
        self.text == target
    }
}
