//! Individual bonus entries as immutable value objects

use serde::{Deserialize, Serialize};

/// What kind of stat a bonus applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusType {
    Attribute,
    Skill,
    Defense,
    Deflect,
    Health,
    Focus,
    Movement,
}

/// A single additive modifier granted by some source.
///
/// Entries are immutable once created and identified only by the source that
/// owns them. The target string is matched exactly; the literal `"all"`
/// target is a catch-all bucket distinct from any specific target, and
/// callers that want "affects everything" semantics query both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEntry {
    #[serde(rename = "type")]
    pub bonus_type: BonusType,
    pub target: String,
    /// Missing values in loaded data contribute 0, never an error
    #[serde(default)]
    pub value: i32,
    /// Free-form condition the display/combat layer interprets; the ledger
    /// itself sums conditional and unconditional entries alike
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl BonusEntry {
    pub fn new(bonus_type: BonusType, target: impl Into<String>, value: i32) -> Self {
        Self {
            bonus_type,
            target: target.into(),
            value,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Whether this entry only applies under some circumstance
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }
}
