use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnePasswordError {
    #[error("{0}")]
    CliNotFound(String),

    #[error("{0}")]
    ValueNotFound(String),

    #[error("{0}")]
    Json(String),

    #[error("{0}")]
    Runtime(String),

    #[error("Invalid version string '{0}'")]
    InvalidVersion(String),

    #[error("Vault name must not be empty")]
    InvalidVault,

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OnePasswordError {
    /// Return a typed exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            OnePasswordError::CliNotFound(_) => 127,
            OnePasswordError::ValueNotFound(_) => 3,
            OnePasswordError::Json(_) => 4,
            OnePasswordError::Runtime(_) => 5,
            OnePasswordError::InvalidVersion(_) => 4,
            OnePasswordError::InvalidVault => 2,
            OnePasswordError::Config(_) => 2,
            OnePasswordError::Io(_) => 1,
        }
    }

    /// Return a string error code identifier.
    pub fn error_code(&self) -> &'static str {
        match self {
            OnePasswordError::CliNotFound(_) => "cli_not_found",
            OnePasswordError::ValueNotFound(_) => "value_not_found",
            OnePasswordError::Json(_) => "json_error",
            OnePasswordError::Runtime(_) => "runtime_error",
            OnePasswordError::InvalidVersion(_) => "invalid_version",
            OnePasswordError::InvalidVault => "invalid_vault",
            OnePasswordError::Config(_) => "config_error",
            OnePasswordError::Io(_) => "io_error",
        }
    }
}

/// JSON error response for --json mode.
#[derive(Serialize)]
pub struct JsonError {
    pub error: JsonErrorDetail,
}

#[derive(Serialize)]
pub struct JsonErrorDetail {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
}

impl JsonError {
    pub fn from_error(e: &OnePasswordError) -> Self {
        Self {
            error: JsonErrorDetail {
                code: e.error_code().to_string(),
                message: e.to_string(),
                exit_code: e.exit_code(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, OnePasswordError>;
