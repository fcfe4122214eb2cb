use std::collections::BTreeSet;

use log::warn;

// ---------------------------------------------------------------------------
// DisconnectTracker – sticky per-run disconnection bookkeeping
// ---------------------------------------------------------------------------

/// Tracks which strings have reported the disconnection sentinel at least
/// once during one pipeline run.
///
/// Disconnection is sticky: once a string has read the sentinel it stays in
/// the set for the rest of the run, even if later readings are non-zero.
/// Each run (live or baseline) owns its own tracker; the sets must never be
/// shared between datasets.
#[derive(Debug)]
pub struct DisconnectTracker {
    sentinel: f64,
    seen: BTreeSet<String>,
}

impl DisconnectTracker {
    pub fn new(sentinel: f64) -> Self {
        Self {
            sentinel,
            seen: BTreeSet::new(),
        }
    }

    /// Record one reading. Returns `true` iff the reading equals the
    /// disconnection sentinel. The first sentinel reading per string emits
    /// a one-time alert; repeats stay silent.
    pub fn observe(&mut self, channel: &str, value: f64) -> bool {
        if value != self.sentinel {
            return false;
        }
        if !self.seen.contains(channel) {
            warn!("Alert: {channel} has been disconnected");
            self.seen.insert(channel.to_string());
        }
        true
    }

    /// Whether the string has ever read the sentinel in this run.
    pub fn is_disconnected(&self, channel: &str) -> bool {
        self.seen.contains(channel)
    }

    /// Strings observed disconnected so far, sorted by name.
    pub fn disconnected(&self) -> &BTreeSet<String> {
        &self.seen
    }

    /// Consume the tracker, yielding the final disconnection set.
    pub fn into_set(self) -> BTreeSet<String> {
        self.seen
    }
}
