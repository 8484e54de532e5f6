use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Unknown Radiant order: {0}")]
    UnknownOrder(String),

    #[error("Unknown definition: {0}")]
    UnknownDefinition(String),

    #[error("Invalid rules data: {0}")]
    InvalidRules(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RulesError>;
