use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeuronTagError {
    #[error("Directive already registered: {name}")]
    DirectiveAlreadyRegistered { name: String },

    #[error("Directive not found: {name}")]
    DirectiveNotFound { name: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Scan root does not exist: {path}")]
    ScanRootNotFound { path: PathBuf },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, NeuronTagError>;

impl NeuronTagError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DirectiveNotFound { .. } => 2,
            Self::ScanRootNotFound { .. } => 3,
            Self::DirectiveAlreadyRegistered { .. } => 4,
            Self::ConfigKeyNotFound { .. } => 5,
            Self::Parse { .. } => 6,
            _ => 1,
        }
    }
}
