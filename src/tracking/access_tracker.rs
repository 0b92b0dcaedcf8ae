//! Per-contact access counting.
//!
//! Counts are keyed by name, created lazily on first touch and never removed,
//! so a deleted contact keeps its count for the rest of the session.

use std::collections::HashMap;

/// Mapping from contact name to the number of times it was touched.
#[derive(Debug, Clone, Default)]
pub struct AccessTracker {
    counts: HashMap<String, u64>,
}

impl AccessTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `name`, starting from zero if absent.
    pub fn record_access(&mut self, name: &str) {
        let count = self.counts.entry(name.to_string()).or_insert(0);
        *count += 1;

        tracing::trace!(name = %name, count = *count, "Access recorded");
    }

    /// Current count for `name` (0 if never touched).
    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// All recorded counts. Iteration order is unspecified.
    pub fn report(&self) -> HashMap<String, u64> {
        self.counts.clone()
    }

    /// Counts ordered most-accessed first, ties broken by name ascending.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
