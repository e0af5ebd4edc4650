// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, ErrorKind,
    InfraResult, InfrastructureError, PresentationError, PresentationResult, ReportError, Result,
};

pub mod error;
