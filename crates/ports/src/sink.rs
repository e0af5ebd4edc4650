// crates/ports/src/sink.rs
use std::path::Path;

use sales_report_domain::AggregatedLine;
use sales_report_shared_kernel::Result;

/// Port for persisting a finished report.
pub trait ReportSink {
    fn write(&self, lines: &[AggregatedLine], destination: &Path) -> Result<()>;
}
