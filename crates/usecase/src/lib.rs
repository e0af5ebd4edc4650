//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: runs the relational and in-memory engines, writes their
//!   reports and cross-checks the two
//! - [`dto`]: plan and outcome types for the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{Engine, EngineOutcome, EngineSelection, ReportOutput, ReportPlan};
pub use orchestrator::BuildReport;
