pub mod error;
pub mod types;

pub use error::{Result, RulesError};
pub use types::CharacterId;
