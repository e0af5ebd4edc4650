// crates/ports/src/progress.rs
use std::path::Path;

/// Receives a notice each time a report file has been persisted.
pub trait ReportNotifier {
    fn written(&self, engine: &str, destination: &Path, rows: usize);
}
