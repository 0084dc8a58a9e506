//! Ordered fallback list walked one step per failure.

/// Cursor over an ordered list of candidate URLs.
///
/// The chain only moves forward: each [`advance`](Self::advance) skips exactly
/// one candidate, and once exhausted it stays exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    candidates: Vec<String>,
    cursor: usize,
}

impl FallbackChain {
    /// Creates a chain positioned on the first candidate.
    #[must_use]
    pub const fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Returns the candidate currently in use.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.candidates.get(self.cursor).map(String::as_str)
    }

    /// Records a failure of the current candidate and moves to the next one.
    pub fn advance(&mut self) -> Option<&str> {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Returns true once every candidate has failed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    /// Candidates that have already failed.
    #[must_use]
    pub fn attempted(&self) -> &[String] {
        &self.candidates[..self.cursor.min(self.candidates.len())]
    }

    /// All candidates in order.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}
