// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod sqlite;

pub use persistence::{DelimitedWriter, FileWriter};
pub use sqlite::{REPORT_QUERY, SqliteSource};
