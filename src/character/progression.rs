//! Talent unlock orchestration - prerequisite checks, ledger grants, and
//! cascade removal
//!
//! Unlocks that carry a pick-N expertise choice are two-phase: the check
//! runs up front, the selection is collected from the caller, and nothing is
//! committed until [`Character::resolve_pending`] validates it. Cancelling
//! aborts with no partial state.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::expertise::ExpertiseSource;
use crate::ledger::SourceRef;
use crate::prereq::requirements_met;
use crate::rules::{ExpertiseChoice, RulesTable, TalentDef};

/// Outcome of an unlock attempt. Precondition failures are values, never
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    /// Set semantics; re-unlocking changes nothing
    AlreadyUnlocked,
    UnknownDefinition,
    PrerequisitesNotMet,
    /// The talent carries an expertise choice; supply a selection via
    /// `resolve_pending` to commit, or `cancel_pending` to abort
    ChoiceRequired { options: Vec<String>, pick: usize },
    /// Another choice unlock is already awaiting its selection
    ChoiceAlreadyPending,
}

/// Outcome of supplying a selection for a pending choice unlock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Committed,
    /// Wrong count, duplicate picks, or picks outside the offered options;
    /// the unlock stays pending
    InvalidSelection,
    NoPending,
    /// Prerequisites no longer hold (something changed since the unlock was
    /// suspended); the pending unlock is dropped
    PrerequisitesNotMet,
}

/// Outcome of a lock (removal) attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    Locked,
    NotUnlocked,
    /// Dependency integrity: other unlocked nodes still require this talent
    Blocked { dependents: Vec<String> },
}

/// A suspended choice unlock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingUnlock {
    pub talent_id: String,
    pub choice: ExpertiseChoice,
}

impl Character {
    /// Unlock a talent, granting its bonuses, forms, and expertises
    pub fn unlock_talent(&mut self, rules: &RulesTable, id: &str) -> UnlockOutcome {
        let Some(def) = rules.talent(id) else {
            return UnlockOutcome::UnknownDefinition;
        };
        if self.talents.contains(id) {
            return UnlockOutcome::AlreadyUnlocked;
        }
        if !requirements_met(&def.prerequisites, &self.talents, self) {
            tracing::debug!(id, "unlock refused: prerequisites not met");
            return UnlockOutcome::PrerequisitesNotMet;
        }

        if let Some(choice) = &def.expertise_choice {
            if self.pending.is_some() {
                return UnlockOutcome::ChoiceAlreadyPending;
            }
            // Two-phase: nothing is committed until the selection arrives
            self.pending = Some(PendingUnlock {
                talent_id: def.id.clone(),
                choice: choice.clone(),
            });
            return UnlockOutcome::ChoiceRequired {
                options: choice.options.clone(),
                pick: choice.pick,
            };
        }

        self.commit_unlock(def.clone(), &[]);
        UnlockOutcome::Unlocked
    }

    /// Supply the selection for a pending choice unlock
    pub fn resolve_pending(&mut self, rules: &RulesTable, selection: &[&str]) -> ChoiceOutcome {
        let Some(pending) = self.pending.as_ref() else {
            return ChoiceOutcome::NoPending;
        };
        let talent_id = pending.talent_id.clone();
        let choice = pending.choice.clone();

        let valid = selection.len() == choice.pick
            && selection.iter().all(|s| choice.options.iter().any(|o| o == s))
            && selection.iter().enumerate().all(|(i, s)| !selection[..i].contains(s));
        if !valid {
            tracing::debug!(talent = %talent_id, "invalid expertise selection");
            return ChoiceOutcome::InvalidSelection;
        }

        let Some(def) = rules.talent(&talent_id).cloned() else {
            // Table swapped out from under a pending unlock; drop it
            tracing::error!(talent = %talent_id, "pending unlock references unknown talent");
            self.pending = None;
            return ChoiceOutcome::NoPending;
        };

        // Re-check: prerequisites may have been invalidated while suspended
        if !requirements_met(&def.prerequisites, &self.talents, self) {
            self.pending = None;
            return ChoiceOutcome::PrerequisitesNotMet;
        }

        self.pending = None;
        self.commit_unlock(def, selection);
        ChoiceOutcome::Committed
    }

    /// Abort a pending choice unlock; no state was committed
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending_unlock(&self) -> Option<&PendingUnlock> {
        self.pending.as_ref()
    }

    fn commit_unlock(&mut self, def: TalentDef, chosen_expertises: &[&str]) {
        tracing::info!(id = %def.id, "talent unlocked");
        self.talents.insert(def.id.clone());
        self.ledger.grant(SourceRef::talent(&def.id), def.bonuses);

        for form_id in &def.grants_forms {
            // Silent no-op when already held
            if self.forms.insert(form_id.clone()) {
                tracing::debug!(form = %form_id, "form granted");
            }
        }

        let source = |id: &str| ExpertiseSource::Talent { id: id.to_string() };
        for name in &def.grants_expertises {
            self.expertises.grant(name.clone(), source(&def.id));
        }
        for name in chosen_expertises {
            self.expertises.grant(*name, source(&def.id));
        }
    }

    /// Remove an unlocked talent and cascade away everything it granted.
    /// Blocked while any other unlocked node lists it as a prerequisite.
    pub fn lock_talent(&mut self, rules: &RulesTable, id: &str) -> LockOutcome {
        if !self.talents.contains(id) {
            return LockOutcome::NotUnlocked;
        }
        let dependents = rules.dependents_of(id, &self.talents, &self.stances);
        if !dependents.is_empty() {
            tracing::debug!(id, ?dependents, "lock refused: dependents remain");
            return LockOutcome::Blocked { dependents };
        }

        self.talents.remove(id);
        self.ledger.revoke(&SourceRef::talent(id));
        self.expertises.cascade_remove_talent(id);

        // Granted forms leave with the talent unless another unlocked talent
        // still grants them
        if let Some(def) = rules.talent(id) {
            for form_id in &def.grants_forms {
                let still_granted = self
                    .talents
                    .iter()
                    .filter_map(|t| rules.talent(t))
                    .any(|t| t.grants_forms.contains(form_id));
                if !still_granted {
                    if self.active_form.active_id() == Some(form_id.as_str()) {
                        self.active_form.deactivate(&mut self.ledger);
                    }
                    self.forms.remove(form_id);
                }
            }
        }

        tracing::info!(id, "talent locked");
        LockOutcome::Locked
    }

    /// Unlock a stance, gated by the same evaluator as talents
    pub fn unlock_stance(&mut self, rules: &RulesTable, id: &str) -> UnlockOutcome {
        let Some(def) = rules.stance(id) else {
            return UnlockOutcome::UnknownDefinition;
        };
        if self.stances.contains(id) {
            return UnlockOutcome::AlreadyUnlocked;
        }
        if !requirements_met(&def.prerequisites, &self.talents, self) {
            return UnlockOutcome::PrerequisitesNotMet;
        }
        // Stance bonuses apply only while the stance is active
        self.stances.insert(def.id.clone());
        UnlockOutcome::Unlocked
    }
}
