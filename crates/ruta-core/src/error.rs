//! Error types and exit codes for ruta
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid network, out-of-range vertex)

use thiserror::Error;

/// Exit codes for the ruta CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid network, out-of-range vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ruta operations
#[derive(Error, Debug)]
pub enum RutaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid vertex count: {0} (must be positive)")]
    InvalidVertexCount(usize),

    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RutaError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RutaError::UnknownFormat(_) | RutaError::UsageError(_) => ExitCode::Usage,

            RutaError::InvalidVertexCount(_)
            | RutaError::VertexOutOfRange { .. }
            | RutaError::InvalidNetwork { .. } => ExitCode::Data,

            RutaError::Io(_) | RutaError::Json(_) | RutaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RutaError::UnknownFormat(_) => "unknown_format",
            RutaError::UsageError(_) => "usage_error",
            RutaError::InvalidVertexCount(_) => "invalid_vertex_count",
            RutaError::VertexOutOfRange { .. } => "vertex_out_of_range",
            RutaError::InvalidNetwork { .. } => "invalid_network",
            RutaError::Io(_) => "io_error",
            RutaError::Json(_) => "json_error",
            RutaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ruta operations
pub type Result<T> = std::result::Result<T, RutaError>;
