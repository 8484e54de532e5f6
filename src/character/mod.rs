//! The character aggregate
//!
//! One `Character` owns all mutable sheet state: unlocked sets, the bonus
//! ledger, radiant progression, active form/stance, expertises. There is no
//! process-wide state; callers pass the aggregate and a rules table
//! explicitly. Single-threaded and synchronous throughout - a networked
//! layer must serialize mutations through one owner per character.

pub mod progression;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::active::{ActiveSlot, SelectOutcome};
use crate::core::{CharacterId, Result};
use crate::expertise::ExpertiseList;
use crate::ledger::{BonusEntry, BonusLedger, BonusType, SourceKind, SourceRef};
use crate::prereq::StatSnapshot;
use crate::radiant::RadiantPath;
use crate::rules::{FormDef, RulesTable, StanceDef};
use crate::skills::SkillSet;

pub use progression::{ChoiceOutcome, LockOutcome, PendingUnlock, UnlockOutcome};

/// Attributes every new character starts with at rank 1
pub const BASE_ATTRIBUTES: &[&str] =
    &["strength", "speed", "intellect", "willpower", "awareness", "presence"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub attributes: AHashMap<String, i32>,
    pub skills: SkillSet,
    pub ledger: BonusLedger,
    pub path: RadiantPath,
    pub talents: AHashSet<String>,
    pub forms: AHashSet<String>,
    pub stances: AHashSet<String>,
    pub active_form: ActiveSlot,
    pub active_stance: ActiveSlot,
    pub expertises: ExpertiseList,
    /// Transient two-phase unlock state; not part of the snapshot
    #[serde(skip)]
    pub(crate) pending: Option<PendingUnlock>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        let attributes = BASE_ATTRIBUTES.iter().map(|a| (a.to_string(), 1)).collect();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            level: 1,
            attributes,
            skills: SkillSet::new(),
            ledger: BonusLedger::new(),
            path: RadiantPath::new(),
            talents: AHashSet::new(),
            forms: AHashSet::new(),
            stances: AHashSet::new(),
            active_form: ActiveSlot::new(SourceKind::Form),
            active_stance: ActiveSlot::new(SourceKind::Stance),
            expertises: ExpertiseList::new(),
            pending: None,
        }
    }

    // ---- Active form / stance -------------------------------------------

    pub fn set_active_form(&mut self, rules: &RulesTable, id: Option<&str>) -> SelectOutcome {
        match id {
            Some(id) => self.active_form.activate(id, &self.forms, &rules.forms, &mut self.ledger),
            None => self.active_form.deactivate(&mut self.ledger),
        }
    }

    pub fn set_active_stance(&mut self, rules: &RulesTable, id: Option<&str>) -> SelectOutcome {
        match id {
            Some(id) => {
                self.active_stance.activate(id, &self.stances, &rules.stances, &mut self.ledger)
            }
            None => self.active_stance.deactivate(&mut self.ledger),
        }
    }

    pub fn active_form_def<'a>(&self, rules: &'a RulesTable) -> Option<&'a FormDef> {
        self.active_form.definition(&rules.forms)
    }

    pub fn active_stance_def<'a>(&self, rules: &'a RulesTable) -> Option<&'a StanceDef> {
        self.active_stance.definition(&rules.stances)
    }

    // ---- Equipment ------------------------------------------------------

    /// Grant an item's bonuses under `equipment:<id>`. Revokes any previous
    /// grant under the same id first, so re-equipping re-syncs instead of
    /// stacking.
    pub fn equip(&mut self, id: &str, entries: Vec<BonusEntry>) {
        let source = SourceRef::equipment(id);
        self.ledger.revoke(&source);
        self.ledger.grant(source, entries);
    }

    pub fn unequip(&mut self, id: &str) {
        self.ledger.revoke(&SourceRef::equipment(id));
    }

    // ---- Derived queries ------------------------------------------------

    /// Ledger total for an exact (type, target) pair
    pub fn bonus_total(&self, bonus_type: BonusType, target: &str) -> i32 {
        self.ledger.total(bonus_type, target)
    }

    /// Ledger total including the `"all"` catch-all bucket
    pub fn bonus_total_with_catch_all(&self, bonus_type: BonusType, target: &str) -> i32 {
        self.ledger.total_with_catch_all(bonus_type, target)
    }

    /// Base attribute plus every attribute bonus affecting it
    pub fn attribute_total(&self, name: &str) -> i32 {
        let base = self.attributes.get(name).copied().unwrap_or(0);
        base + self.ledger.total_with_catch_all(BonusType::Attribute, name)
    }

    /// Skill rank plus every skill bonus affecting it; `None` for unknown
    /// skills
    pub fn skill_total(&self, name: &str) -> Option<i32> {
        let rank = self.skills.rank(name)?;
        Some(rank + self.ledger.total_with_catch_all(BonusType::Skill, name))
    }

    // ---- Persistence snapshot -------------------------------------------

    /// Serialize the whole sheet; the engine itself performs no I/O
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl StatSnapshot for Character {
    fn attribute(&self, name: &str) -> Option<i32> {
        self.attributes.get(name).copied()
    }

    fn skill_rank(&self, name: &str) -> Option<i32> {
        self.skills.rank(name)
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn ideal_spoken(&self) -> bool {
        self.path.has_spoken_ideal()
    }
}
