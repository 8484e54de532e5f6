//! Prerequisite evaluation - pure checks gating talent, form, and stance
//! unlocks
//!
//! Grouping is flat and one level deep: everything outside the OR group must
//! hold, and the OR group (when present) needs at least one hit. There are
//! no nested boolean trees.

pub mod eval;
pub mod node;
pub mod snapshot;

pub use eval::requirements_met;
pub use node::{Prerequisite, Requirement};
pub use snapshot::StatSnapshot;
