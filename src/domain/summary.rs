//! Run summary counters

use super::UpdateOutcome;

/// Aggregate counts for one run of the updater
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Dependencies whose latest version was queried
    pub checked: usize,
    /// Dependencies already at the latest version
    pub up_to_date: usize,
    /// Dependencies that were installed at a new version
    pub updated: usize,
    /// Dependencies in skipped categories
    pub ignored: usize,
}

impl UpdateSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one checked dependency
    pub fn record(&mut self, outcome: &UpdateOutcome) {
        self.checked += 1;
        if outcome.is_updated() {
            self.updated += 1;
        } else {
            self.up_to_date += 1;
        }
    }

    /// Adds the entries of a skipped category to the ignored counter
    pub fn add_ignored(&mut self, count: usize) {
        self.ignored += count;
    }
}
