//! Bonus ledger - the aggregate store of every active numeric modifier,
//! grouped by the source that granted it
//!
//! Every grant and revoke is atomic per source: a talent, stance, or piece of
//! equipment either contributes all of its entries or none of them.

pub mod entry;
pub mod source;
pub mod store;

pub use entry::{BonusEntry, BonusType};
pub use source::{SourceKind, SourceRef};
pub use store::BonusLedger;
