//! Error types for the workflow engine.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comprehensive error type for all studio operations.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: u64 },
    /// Step not found, or not owned by the given project
    #[error("Step with ID {step_id} not found in project {project_id}")]
    StepNotFound { project_id: u64, step_id: u64 },
    /// The step is not in a state that accepts the operation
    #[error("Step {step_id} cannot be resolved: {reason}")]
    InvalidState { step_id: u64, reason: String },
    /// The action or its payload is not legal for the step
    #[error("Invalid action '{action}' for step {step_id}: {reason}")]
    InvalidAction {
        step_id: u64,
        action: String,
        reason: String,
    },
    /// A workflow invariant would be broken by the pending mutation
    #[error("Workflow invariant violated for project {project_id}: {reason}")]
    Invariant { project_id: u64, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Caller-visible classification of a [`StudioError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    InvalidAction,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::InvalidAction => "invalid_action",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured `{kind, message}` error handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&StudioError> for ErrorReport {
    fn from(error: &StudioError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StudioError {
        StudioError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for resolution payload errors.
pub struct InvalidActionBuilder {
    step_id: u64,
    action: String,
}

impl InvalidActionBuilder {
    pub fn new(step_id: u64, action: impl Into<String>) -> Self {
        Self {
            step_id,
            action: action.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StudioError {
        StudioError::InvalidAction {
            step_id: self.step_id,
            action: self.action,
            reason: reason.into(),
        }
    }
}

impl StudioError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for illegal-action errors.
    pub fn invalid_action(step_id: u64, action: impl Into<String>) -> InvalidActionBuilder {
        InvalidActionBuilder::new(step_id, action)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::database(message).with_source(source)
    }

    /// Classify the error for callers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StudioError::ProjectNotFound { .. } | StudioError::StepNotFound { .. } => {
                ErrorKind::NotFound
            }
            StudioError::InvalidState { .. } | StudioError::Invariant { .. } => {
                ErrorKind::InvalidState
            }
            StudioError::InvalidAction { .. } | StudioError::InvalidInput { .. } => {
                ErrorKind::InvalidAction
            }
            StudioError::Database { .. }
            | StudioError::FileSystem { .. }
            | StudioError::XdgDirectory(_)
            | StudioError::Serialization { .. }
            | StudioError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Structured form of the error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StudioError::database(message).with_source(e))
    }
}

/// Extension trait for joining blocking tasks.
pub trait JoinResultExt<T> {
    /// Flatten a `spawn_blocking` join result into a studio result.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<Result<T>, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| StudioError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, StudioError>;
