//! Prerequisite node types

use serde::{Deserialize, Deserializer, Serialize};

/// One condition gating an unlock, exhaustively matched by the evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Requirement {
    /// Another talent must already be unlocked
    Talent { id: String },
    /// A skill rank threshold; unresolvable skill names evaluate false
    Skill { name: String, rank: i32 },
    /// An attribute threshold; missing attributes evaluate false
    Attribute { name: String, min: i32 },
    /// Minimum character level
    Level { min: u32 },
    /// Radiant ideal gate. Only `"first"` is meaningful today; other targets
    /// evaluate false and are reserved for later ideal tiers.
    Ideal { target: String },
}

/// A requirement plus its grouping marker.
///
/// `any_of` puts the requirement into the OR group. In rules TOML a bare
/// string is shorthand for a talent requirement in the AND group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prerequisite {
    #[serde(flatten)]
    pub requirement: Requirement,
    #[serde(rename = "or", skip_serializing_if = "std::ops::Not::not")]
    pub any_of: bool,
}

impl Prerequisite {
    pub fn talent(id: impl Into<String>) -> Self {
        Self::of(Requirement::Talent { id: id.into() })
    }

    pub fn skill(name: impl Into<String>, rank: i32) -> Self {
        Self::of(Requirement::Skill { name: name.into(), rank })
    }

    pub fn attribute(name: impl Into<String>, min: i32) -> Self {
        Self::of(Requirement::Attribute { name: name.into(), min })
    }

    pub fn level(min: u32) -> Self {
        Self::of(Requirement::Level { min })
    }

    pub fn ideal(target: impl Into<String>) -> Self {
        Self::of(Requirement::Ideal { target: target.into() })
    }

    fn of(requirement: Requirement) -> Self {
        Self { requirement, any_of: false }
    }

    /// Move this prerequisite into the OR group
    pub fn or(mut self) -> Self {
        self.any_of = true;
        self
    }

    /// Does this prerequisite reference the given talent id?
    pub fn references_talent(&self, talent_id: &str) -> bool {
        matches!(&self.requirement, Requirement::Talent { id } if id == talent_id)
    }
}

impl<'de> Deserialize<'de> for Prerequisite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawFull {
            #[serde(flatten)]
            requirement: Requirement,
            #[serde(rename = "or", default)]
            any_of: bool,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Shorthand(String),
            Full(RawFull),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Shorthand(id) => Prerequisite::talent(id),
            Raw::Full(full) => Prerequisite {
                requirement: full.requirement,
                any_of: full.any_of,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_deserializes_as_talent() {
        let p: Prerequisite = serde_json::from_str("\"swordsmanship\"").unwrap();
        assert_eq!(p, Prerequisite::talent("swordsmanship"));
        assert!(!p.any_of);
    }

    #[test]
    fn test_full_form_with_or_marker() {
        let p: Prerequisite =
            serde_json::from_str(r#"{"type":"attribute","name":"strength","min":2,"or":true}"#)
                .unwrap();
        assert_eq!(p, Prerequisite::attribute("strength", 2).or());
    }

    #[test]
    fn test_references_talent() {
        assert!(Prerequisite::talent("a").references_talent("a"));
        assert!(!Prerequisite::talent("a").references_talent("b"));
        assert!(!Prerequisite::level(3).references_talent("a"));
    }
}
