//! Skill ranks and name resolution
//!
//! A static registry names every skill the rules know, mundane and surge
//! alike. Rank lookups resolve loose names (case, spaces, hyphens) against
//! the registry first; an unresolvable name is `None`, which prerequisite
//! evaluation treats as not satisfied.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Every skill the rules tables may reference, canonical ids
pub const SKILL_REGISTRY: &[&str] = &[
    // Mundane skills
    "agility",
    "athletics",
    "crafting",
    "deception",
    "deduction",
    "discipline",
    "heavy_weaponry",
    "insight",
    "intimidation",
    "leadership",
    "light_weaponry",
    "lore",
    "medicine",
    "perception",
    "persuasion",
    "stealth",
    "survival",
    "thievery",
    // Surge skills
    "adhesion",
    "gravitation",
    "division",
    "abrasion",
    "progression",
    "illumination",
    "transformation",
    "transportation",
    "cohesion",
    "tension",
];

/// Resolve a loose skill name to its canonical registry id
pub fn resolve_skill(name: &str) -> Option<&'static str> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect();
    SKILL_REGISTRY.iter().copied().find(|id| *id == normalized)
}

/// Per-character skill ranks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    ranks: AHashMap<String, i32>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rank; known-but-unranked skills are 0, unknown names `None`
    pub fn rank(&self, name: &str) -> Option<i32> {
        let id = resolve_skill(name)?;
        Some(self.ranks.get(id).copied().unwrap_or(0))
    }

    /// Set a rank outright; false when the name resolves to no known skill
    pub fn set_rank(&mut self, name: &str, rank: i32) -> bool {
        match resolve_skill(name) {
            Some(id) => {
                self.ranks.insert(id.to_string(), rank);
                true
            }
            None => false,
        }
    }

    /// Raise a skill to at least `rank`, never lowering an existing higher
    /// rank. Used when speaking the First Ideal grants surge skills.
    pub fn raise_to_at_least(&mut self, name: &str, rank: i32) -> bool {
        match resolve_skill(name) {
            Some(id) => {
                let entry = self.ranks.entry(id.to_string()).or_insert(0);
                if *entry < rank {
                    *entry = rank;
                }
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.ranks.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
