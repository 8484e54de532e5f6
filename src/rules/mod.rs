//! Static rules tables - talent, form, and stance definitions
//!
//! A table is loaded once at startup and treated as immutable for the
//! engine's lifetime. The builtin table ships compiled in; TOML files in a
//! data directory overlay it by id.

pub mod builtin;
pub mod defs;
mod loader;

pub use defs::{ExpertiseChoice, FormDef, RulesTable, StanceDef, TalentDef};
pub use loader::load_rules;
