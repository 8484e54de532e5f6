//! Radiant Rules - character sheet rules engine
//!
//! The effect ledger and prerequisite-gated progression engine behind a
//! Stormlight-inspired tabletop RPG: additive bonus aggregation with atomic
//! cascade removal, a pure prerequisite evaluator, the spren-bond/ideal
//! state machine, and mutually-exclusive active forms and stances.

pub mod active;
pub mod character;
pub mod core;
pub mod expertise;
pub mod ledger;
pub mod prereq;
pub mod radiant;
pub mod rules;
pub mod skills;
