//! Mutually-exclusive active effects - Singer forms and combat stances
//!
//! Each category holds at most one active id at a time, always a member of
//! that category's unlocked set. Activating revokes the previous id's ledger
//! source before the new one is granted, so switching can never leave stale
//! bonuses behind. Re-activating the current id is refresh semantics:
//! revoke-then-reapply, never stacking.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::ledger::{BonusEntry, BonusLedger, SourceKind, SourceRef};

/// Anything with a bonus list the selector can push into the ledger
pub trait BonusSource {
    fn bonuses(&self) -> &[BonusEntry];
}

/// Outcome of a selection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Cleared,
    /// The id is not in the category's unlocked set; state unchanged
    NotUnlocked,
}

/// One exclusive slot, e.g. the active form or the active stance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSlot {
    kind: SourceKind,
    active: Option<String>,
}

impl ActiveSlot {
    pub fn new(kind: SourceKind) -> Self {
        Self { kind, active: None }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Make `id` the active choice, retracting whatever was active before.
    ///
    /// Fails without touching any state when `id` is not unlocked. An id
    /// missing from the definition table still activates, contributing no
    /// bonuses (defensive consistency over hard failure).
    pub fn activate<D: BonusSource>(
        &mut self,
        id: &str,
        unlocked: &AHashSet<String>,
        defs: &AHashMap<String, D>,
        ledger: &mut BonusLedger,
    ) -> SelectOutcome {
        if !unlocked.contains(id) {
            tracing::debug!(kind = self.kind.as_str(), id, "activation refused: not unlocked");
            return SelectOutcome::NotUnlocked;
        }
        if let Some(prev) = self.active.take() {
            ledger.revoke(&SourceRef::new(self.kind, prev));
        }
        let entries: Vec<BonusEntry> = defs
            .get(id)
            .map(|def| def.bonuses().to_vec())
            .unwrap_or_default();
        ledger.grant(SourceRef::new(self.kind, id), entries);
        self.active = Some(id.to_string());
        tracing::debug!(kind = self.kind.as_str(), id, "activated");
        SelectOutcome::Selected
    }

    /// Clear the slot; always succeeds
    pub fn deactivate(&mut self, ledger: &mut BonusLedger) -> SelectOutcome {
        if let Some(prev) = self.active.take() {
            ledger.revoke(&SourceRef::new(self.kind, prev));
        }
        SelectOutcome::Cleared
    }

    /// Resolve the active id in a definition table; `None` when unset or
    /// unresolvable
    pub fn definition<'a, D>(&self, defs: &'a AHashMap<String, D>) -> Option<&'a D> {
        self.active.as_ref().and_then(|id| defs.get(id))
    }
}
