// src/app.rs
use anyhow::Result;
use sales_report_domain::Comparison;
use sales_report_infra::{DelimitedWriter, SqliteSource};
use sales_report_usecase::{BuildReport, ReportOutput};

use crate::{config::ReportConfig, presentation::ConsoleNotifier};

/// Open the database once, run the selected engines, close the database.
///
/// The connection is closed whether or not the run succeeded.
pub fn run(config: &ReportConfig) -> Result<ReportOutput> {
    let source = SqliteSource::open(&config.db)?;

    let writer = DelimitedWriter::new();
    let notifier = ConsoleNotifier;
    let outcome = BuildReport::new(&source, &source, &writer, Some(&notifier)).run(&config.plan());
    let closed = source.close();

    let output = outcome?;
    closed?;

    if let Some(Comparison::Identical { rows }) = &output.comparison {
        tracing::info!(rows, "SQL and in-memory results are identical");
    }
    Ok(output)
}
