//! The radiant path state proper

use serde::{Deserialize, Serialize};

use crate::core::{Result, RulesError};
use crate::radiant::orders::{order_from_id, order_info, OrderInfo, RadiantOrder, Surge};
use crate::skills::SkillSet;

/// Outcome of a spren-bond attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    /// Already bound; the bond is one-directional and the call changed
    /// nothing
    AlreadyBound,
}

/// Outcome of speaking the First Ideal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdealOutcome {
    Spoken,
    /// Idempotent no-op, not an error
    AlreadySpoken,
    /// No spren bound yet
    NotBound,
}

/// Spren-bond / ideal progression for one character.
///
/// The surge pair is derived from the bound order, so it can never be
/// populated while unbound and `ideal_spoken` implies a bound order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadiantPath {
    bound_order: Option<RadiantOrder>,
    ideal_spoken: bool,
}

impl RadiantPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a spren of the given order. Only valid while unbound; an unknown
    /// order id is a hard error since it means bad static data, not bad
    /// player input.
    pub fn grant_spren(&mut self, order_id: &str) -> Result<BindOutcome> {
        let order = order_from_id(order_id)
            .ok_or_else(|| RulesError::UnknownOrder(order_id.to_string()))?;
        if self.bound_order.is_some() {
            return Ok(BindOutcome::AlreadyBound);
        }
        self.bound_order = Some(order);
        self.ideal_spoken = false;
        tracing::info!(order = order.id(), "spren bond formed");
        Ok(BindOutcome::Bound)
    }

    /// Speak the First Ideal. On the first call both surge skills rise to at
    /// least rank 1 - never lowering a player-chosen higher rank - and the
    /// spoken flag is set. Re-speaking is a warned no-op.
    pub fn speak_ideal(&mut self, skills: &mut SkillSet) -> IdealOutcome {
        let Some(order) = self.bound_order else {
            return IdealOutcome::NotBound;
        };
        if self.ideal_spoken {
            tracing::warn!(order = order.id(), "ideal already spoken");
            return IdealOutcome::AlreadySpoken;
        }
        for surge in order_info(order).surges {
            skills.raise_to_at_least(surge.skill_name(), 1);
        }
        self.ideal_spoken = true;
        tracing::info!(order = order.id(), "first ideal spoken");
        IdealOutcome::Spoken
    }

    /// Back to Unbound. Administrative only; the modeled rules have no
    /// un-binding.
    pub fn reset(&mut self) {
        self.bound_order = None;
        self.ideal_spoken = false;
    }

    pub fn has_spren(&self) -> bool {
        self.bound_order.is_some()
    }

    pub fn has_spoken_ideal(&self) -> bool {
        self.ideal_spoken
    }

    pub fn bound_order(&self) -> Option<RadiantOrder> {
        self.bound_order
    }

    /// Order table row when bound
    pub fn order_info(&self) -> Option<&'static OrderInfo> {
        self.bound_order.map(order_info)
    }

    /// Surge pair when bound
    pub fn surge_pair(&self) -> Option<[Surge; 2]> {
        self.order_info().map(|info| info.surges)
    }
}
