// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ReportError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Coarse classification of a failure, independent of the layer that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data source could not be opened or read.
    Connection,
    /// A required table or column is absent.
    Schema,
    /// The aggregate could not be computed, by SQL or in memory.
    Query,
    /// An output destination could not be written.
    Write,
    /// The two engines produced different results.
    Divergence,
    /// Invalid configuration or command line input.
    Config,
}

impl ReportError {
    /// Classify this error, looking through any context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Domain(err) => match err {
                DomainError::MissingTable { .. } | DomainError::MissingColumn { .. } => ErrorKind::Schema,
                DomainError::InvalidAgeBand { .. } => ErrorKind::Config,
                DomainError::IntegerOverflow { .. } => ErrorKind::Query,
            },
            Self::Infrastructure(err) => match err {
                InfrastructureError::Connection { .. } => ErrorKind::Connection,
                InfrastructureError::Query { .. } => ErrorKind::Query,
                InfrastructureError::FileWrite { .. } | InfrastructureError::SerializationError { .. } => {
                    ErrorKind::Write
                }
            },
            Self::Application(err) => match err {
                ApplicationError::EngineDivergence { .. } => ErrorKind::Divergence,
                ApplicationError::EngineFailed { source, .. } => source.kind(),
            },
            Self::Presentation(_) => ErrorKind::Config,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Schema error: table '{table}' does not exist")]
    MissingTable { table: String },

    #[error("Schema error: table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Invalid age band: {min} must not exceed {max}")]
    InvalidAgeBand { min: i64, max: i64 },

    #[error("integer overflow summing quantities of '{item}' for customer {customer}")]
    IntegerOverflow { customer: i64, item: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{engine} engine failed: {source}")]
    EngineFailed {
        engine: String,
        #[source]
        source: Box<ReportError>,
    },

    #[error("Engines disagree: {details}")]
    EngineDivergence { details: String },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open data source '{path}': {details}")]
    Connection { path: PathBuf, details: String },

    #[error("Query failed: {details}")]
    Query { details: String },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ReportError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReportError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ReportError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
