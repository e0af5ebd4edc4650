//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: read access to the relational store, table by table or as the
//!   aggregate the store computes itself
//! - [`sink`]: persistence of a finished report
//! - [`progress`]: notices emitted as each report file lands
//!
//! These ports keep the domain and use case layers independent of SQLite and
//! of the output file format.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod progress;
pub mod sink;
pub mod source;
