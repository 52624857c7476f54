use crate::model::RecordKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("Resume store is not initialized")]
    NotInitialized,

    #[error("Cannot submit {kind}: missing {fields}", fields = .missing.join(", "))]
    Incomplete {
        kind: RecordKind,
        missing: Vec<&'static str>,
    },

    #[error("Unknown field '{field}' for {target}")]
    UnknownField { target: String, field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Unknown template: {0} (expected professional or executive)")]
    UnknownTemplate(String),

    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ResumeError>;
