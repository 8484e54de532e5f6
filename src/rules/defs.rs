//! Definition records and the table that holds them

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::active::BonusSource;
use crate::ledger::BonusEntry;
use crate::prereq::Prerequisite;

/// A pick-N-of-M expertise grant attached to a talent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseChoice {
    pub options: Vec<String>,
    pub pick: usize,
}

/// A talent node in a progression tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentDef {
    pub id: String,
    pub name: String,
    /// Which tree the talent belongs to, display grouping only
    #[serde(default)]
    pub tree: String,
    #[serde(default)]
    pub bonuses: Vec<BonusEntry>,
    #[serde(default)]
    pub prerequisites: Vec<Prerequisite>,
    /// Singer forms this talent unlocks
    #[serde(default)]
    pub grants_forms: Vec<String>,
    /// Expertises granted outright
    #[serde(default)]
    pub grants_expertises: Vec<String>,
    /// Expertises granted as a player choice; suspends the unlock until the
    /// selection is supplied
    #[serde(default)]
    pub expertise_choice: Option<ExpertiseChoice>,
}

/// A Singer form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bonuses: Vec<BonusEntry>,
}

/// A combat stance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StanceDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bonuses: Vec<BonusEntry>,
    #[serde(default)]
    pub prerequisites: Vec<Prerequisite>,
}

impl BonusSource for FormDef {
    fn bonuses(&self) -> &[BonusEntry] {
        &self.bonuses
    }
}

impl BonusSource for StanceDef {
    fn bonuses(&self) -> &[BonusEntry] {
        &self.bonuses
    }
}

/// The immutable rules table the engine consults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesTable {
    pub talents: AHashMap<String, TalentDef>,
    pub forms: AHashMap<String, FormDef>,
    pub stances: AHashMap<String, StanceDef>,
}

impl RulesTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn talent(&self, id: &str) -> Option<&TalentDef> {
        self.talents.get(id)
    }

    pub fn form(&self, id: &str) -> Option<&FormDef> {
        self.forms.get(id)
    }

    pub fn stance(&self, id: &str) -> Option<&StanceDef> {
        self.stances.get(id)
    }

    pub fn insert_talent(&mut self, def: TalentDef) {
        self.talents.insert(def.id.clone(), def);
    }

    pub fn insert_form(&mut self, def: FormDef) {
        self.forms.insert(def.id.clone(), def);
    }

    pub fn insert_stance(&mut self, def: StanceDef) {
        self.stances.insert(def.id.clone(), def);
    }

    /// Currently-unlocked nodes that list `talent_id` among their
    /// prerequisites. A non-empty result blocks locking that talent.
    pub fn dependents_of(
        &self,
        talent_id: &str,
        unlocked_talents: &AHashSet<String>,
        unlocked_stances: &AHashSet<String>,
    ) -> Vec<String> {
        let talent_deps = unlocked_talents
            .iter()
            .filter(|id| id.as_str() != talent_id)
            .filter_map(|id| self.talent(id))
            .filter(|def| def.prerequisites.iter().any(|p| p.references_talent(talent_id)))
            .map(|def| def.id.clone());
        let stance_deps = unlocked_stances
            .iter()
            .filter_map(|id| self.stance(id))
            .filter(|def| def.prerequisites.iter().any(|p| p.references_talent(talent_id)))
            .map(|def| def.id.clone());
        talent_deps.chain(stance_deps).collect()
    }
}
