//! The ledger store: source key -> ordered bonus entries

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::ledger::{BonusEntry, BonusType, SourceRef};

/// Keyed store of every modifier currently in effect.
///
/// Queries aggregate by summation over all sources; bonuses are purely
/// additive, there is no min/max/override stacking. None of the operations
/// here can fail: revoking an absent source is a no-op and a total over zero
/// entries is 0.
///
/// Re-granting a source that was never revoked accumulates. Idempotency is
/// the caller's responsibility: an orchestrator re-syncing a source must
/// revoke before granting again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BonusLedger {
    entries: AHashMap<SourceRef, Vec<BonusEntry>>,
}

impl BonusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries under a source key
    pub fn grant(&mut self, source: SourceRef, entries: impl IntoIterator<Item = BonusEntry>) {
        let bucket = self.entries.entry(source).or_default();
        let before = bucket.len();
        bucket.extend(entries);
        tracing::debug!(added = bucket.len() - before, "ledger grant");
    }

    /// Remove every entry under a source key; no-op when the key is absent
    pub fn revoke(&mut self, source: &SourceRef) {
        if self.entries.remove(source).is_some() {
            tracing::debug!(source = %source, "ledger revoke");
        }
    }

    /// Sum of values over every entry matching (type, target) exactly.
    ///
    /// The `"all"` target is its own bucket; see [`total_with_catch_all`]
    /// when a caller wants both.
    ///
    /// [`total_with_catch_all`]: Self::total_with_catch_all
    pub fn total(&self, bonus_type: BonusType, target: &str) -> i32 {
        self.entries
            .values()
            .flatten()
            .filter(|e| e.bonus_type == bonus_type && e.target == target)
            .map(|e| e.value)
            .sum()
    }

    /// Sum for a specific target plus the literal `"all"` catch-all bucket
    pub fn total_with_catch_all(&self, bonus_type: BonusType, target: &str) -> i32 {
        if target == "all" {
            self.total(bonus_type, "all")
        } else {
            self.total(bonus_type, target) + self.total(bonus_type, "all")
        }
    }

    /// Conditional entries matching (type, target), for display layers that
    /// gate them on circumstance
    pub fn conditional_entries(&self, bonus_type: BonusType, target: &str) -> Vec<&BonusEntry> {
        self.entries
            .values()
            .flatten()
            .filter(|e| e.bonus_type == bonus_type && e.target == target && e.is_conditional())
            .collect()
    }

    /// Entries currently held under a source; empty when absent
    pub fn entries_of(&self, source: &SourceRef) -> &[BonusEntry] {
        self.entries.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_source(&self, source: &SourceRef) -> bool {
        self.entries.contains_key(source)
    }

    pub fn sources(&self) -> impl Iterator<Item = &SourceRef> {
        self.entries.keys()
    }
}
