//! Expertise records and their provenance
//!
//! Culture- and talent-granted expertises only ever leave the list by
//! cascade when their granting source goes away; GM and manual entries are
//! directly removable.

use serde::{Deserialize, Serialize};

/// Where an expertise came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ExpertiseSource {
    Culture { id: String },
    Talent { id: String },
    Gm,
    Manual,
}

impl ExpertiseSource {
    /// Only GM and manual entries may be removed by direct user action
    pub fn removable_directly(&self) -> bool {
        matches!(self, ExpertiseSource::Gm | ExpertiseSource::Manual)
    }
}

/// One held expertise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expertise {
    pub name: String,
    pub source: ExpertiseSource,
}

/// A character's selected expertises
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpertiseList {
    entries: Vec<Expertise>,
}

impl ExpertiseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expertise. Set semantics on (name, source): re-granting an
    /// identical record is a silent no-op. Returns whether anything changed.
    pub fn grant(&mut self, name: impl Into<String>, source: ExpertiseSource) -> bool {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name && e.source == source) {
            return false;
        }
        tracing::debug!(name = %name, "expertise granted");
        self.entries.push(Expertise { name, source });
        true
    }

    /// Remove a directly-removable (GM/manual) entry by name. Refuses when
    /// only cascade-protected entries carry the name.
    pub fn remove_direct(&mut self, name: &str) -> bool {
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name && e.source.removable_directly());
        match index {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => {
                tracing::debug!(name, "direct expertise removal refused");
                false
            }
        }
    }

    /// Drop every expertise granted by the given talent; returns how many
    /// were removed
    pub fn cascade_remove_talent(&mut self, talent_id: &str) -> usize {
        self.cascade_remove(|source| {
            matches!(source, ExpertiseSource::Talent { id } if id == talent_id)
        })
    }

    /// Drop every expertise granted by the given culture
    pub fn cascade_remove_culture(&mut self, culture_id: &str) -> usize {
        self.cascade_remove(|source| {
            matches!(source, ExpertiseSource::Culture { id } if id == culture_id)
        })
    }

    fn cascade_remove(&mut self, matches_source: impl Fn(&ExpertiseSource) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !matches_source(&e.source));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, "expertises cascade-removed");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expertise> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_is_idempotent_per_source() {
        let mut list = ExpertiseList::new();
        let source = ExpertiseSource::Talent { id: "deft-hands".to_string() };
        assert!(list.grant("Sleight of Hand", source.clone()));
        assert!(!list.grant("Sleight of Hand", source));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_same_name_different_sources_coexist() {
        let mut list = ExpertiseList::new();
        list.grant("Sleight of Hand", ExpertiseSource::Talent { id: "deft-hands".to_string() });
        list.grant("Sleight of Hand", ExpertiseSource::Manual);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_direct_removal_only_for_gm_and_manual() {
        let mut list = ExpertiseList::new();
        list.grant("Stormwardenry", ExpertiseSource::Culture { id: "alethi".to_string() });
        list.grant("Chull Care", ExpertiseSource::Manual);

        assert!(!list.remove_direct("Stormwardenry"));
        assert!(list.contains("Stormwardenry"));

        assert!(list.remove_direct("Chull Care"));
        assert!(!list.contains("Chull Care"));
    }

    #[test]
    fn test_culture_cascade() {
        let mut list = ExpertiseList::new();
        list.grant("Stormwardenry", ExpertiseSource::Culture { id: "alethi".to_string() });
        list.grant("Farming", ExpertiseSource::Culture { id: "herdazian".to_string() });

        assert_eq!(list.cascade_remove_culture("alethi"), 1);
        assert!(!list.contains("Stormwardenry"));
        assert!(list.contains("Farming"));
    }

    #[test]
    fn test_cascade_removal_spares_other_sources() {
        let mut list = ExpertiseList::new();
        list.grant("Sleight of Hand", ExpertiseSource::Talent { id: "deft-hands".to_string() });
        list.grant("Lockpicking", ExpertiseSource::Talent { id: "deft-hands".to_string() });
        list.grant("Sleight of Hand", ExpertiseSource::Manual);

        assert_eq!(list.cascade_remove_talent("deft-hands"), 2);
        assert!(list.contains("Sleight of Hand"));
        assert_eq!(list.len(), 1);
    }
}
