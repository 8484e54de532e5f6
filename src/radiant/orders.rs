//! Static Radiant order table - order -> spren type and surge pair
//!
//! Loaded once into the binary; the engine treats it as immutable.

use serde::{Deserialize, Serialize};

/// The ten Radiant orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiantOrder {
    Windrunner,
    Skybreaker,
    Dustbringer,
    Edgedancer,
    Truthwatcher,
    Lightweaver,
    Elsecaller,
    Willshaper,
    Stoneward,
    Bondsmith,
}

impl RadiantOrder {
    pub fn id(&self) -> &'static str {
        order_info(*self).id
    }
}

/// The ten Surges; each maps to a surge skill in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surge {
    Adhesion,
    Gravitation,
    Division,
    Abrasion,
    Progression,
    Illumination,
    Transformation,
    Transportation,
    Cohesion,
    Tension,
}

impl Surge {
    /// Canonical skill id this surge trains
    pub fn skill_name(&self) -> &'static str {
        match self {
            Surge::Adhesion => "adhesion",
            Surge::Gravitation => "gravitation",
            Surge::Division => "division",
            Surge::Abrasion => "abrasion",
            Surge::Progression => "progression",
            Surge::Illumination => "illumination",
            Surge::Transformation => "transformation",
            Surge::Transportation => "transportation",
            Surge::Cohesion => "cohesion",
            Surge::Tension => "tension",
        }
    }
}

/// One row of the order table
#[derive(Debug, Clone)]
pub struct OrderInfo {
    pub order: RadiantOrder,
    pub id: &'static str,
    pub name: &'static str,
    pub spren_type: &'static str,
    pub surges: [Surge; 2],
}

/// Rows indexed in `RadiantOrder` declaration order
pub static ORDER_TABLE: &[OrderInfo] = &[
    OrderInfo {
        order: RadiantOrder::Windrunner,
        id: "windrunner",
        name: "Windrunners",
        spren_type: "Honorspren",
        surges: [Surge::Adhesion, Surge::Gravitation],
    },
    OrderInfo {
        order: RadiantOrder::Skybreaker,
        id: "skybreaker",
        name: "Skybreakers",
        spren_type: "Highspren",
        surges: [Surge::Gravitation, Surge::Division],
    },
    OrderInfo {
        order: RadiantOrder::Dustbringer,
        id: "dustbringer",
        name: "Dustbringers",
        spren_type: "Ashspren",
        surges: [Surge::Division, Surge::Abrasion],
    },
    OrderInfo {
        order: RadiantOrder::Edgedancer,
        id: "edgedancer",
        name: "Edgedancers",
        spren_type: "Cultivationspren",
        surges: [Surge::Abrasion, Surge::Progression],
    },
    OrderInfo {
        order: RadiantOrder::Truthwatcher,
        id: "truthwatcher",
        name: "Truthwatchers",
        spren_type: "Mistspren",
        surges: [Surge::Progression, Surge::Illumination],
    },
    OrderInfo {
        order: RadiantOrder::Lightweaver,
        id: "lightweaver",
        name: "Lightweavers",
        spren_type: "Cryptic",
        surges: [Surge::Illumination, Surge::Transformation],
    },
    OrderInfo {
        order: RadiantOrder::Elsecaller,
        id: "elsecaller",
        name: "Elsecallers",
        spren_type: "Inkspren",
        surges: [Surge::Transformation, Surge::Transportation],
    },
    OrderInfo {
        order: RadiantOrder::Willshaper,
        id: "willshaper",
        name: "Willshapers",
        spren_type: "Lightspren",
        surges: [Surge::Transportation, Surge::Cohesion],
    },
    OrderInfo {
        order: RadiantOrder::Stoneward,
        id: "stoneward",
        name: "Stonewards",
        spren_type: "Peakspren",
        surges: [Surge::Cohesion, Surge::Tension],
    },
    OrderInfo {
        order: RadiantOrder::Bondsmith,
        id: "bondsmith",
        name: "Bondsmiths",
        spren_type: "Godspren",
        surges: [Surge::Tension, Surge::Adhesion],
    },
];

/// Table row for an order
pub fn order_info(order: RadiantOrder) -> &'static OrderInfo {
    &ORDER_TABLE[order as usize]
}

/// Parse an order id string, case-insensitive
pub fn order_from_id(id: &str) -> Option<RadiantOrder> {
    let id = id.trim().to_ascii_lowercase();
    ORDER_TABLE.iter().find(|info| info.id == id).map(|info| info.order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indexed_in_enum_order() {
        for (index, info) in ORDER_TABLE.iter().enumerate() {
            assert_eq!(info.order as usize, index, "row {} out of order", info.id);
        }
    }

    #[test]
    fn test_order_from_id() {
        assert_eq!(order_from_id("Windrunner"), Some(RadiantOrder::Windrunner));
        assert_eq!(order_from_id("EDGEDANCER"), Some(RadiantOrder::Edgedancer));
        assert_eq!(order_from_id("voidbringer"), None);
    }

    #[test]
    fn test_every_surge_skill_is_registered() {
        for info in ORDER_TABLE {
            for surge in info.surges {
                assert!(crate::skills::resolve_skill(surge.skill_name()).is_some());
            }
        }
    }
}
