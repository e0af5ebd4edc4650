// src/presentation.rs
use std::path::Path;

use sales_report_ports::progress::ReportNotifier;

/// Prints one confirmation line per report file on stdout.
pub struct ConsoleNotifier;

impl ReportNotifier for ConsoleNotifier {
    fn written(&self, engine: &str, destination: &Path, _rows: usize) {
        println!("{}", confirmation_line(engine, destination));
    }
}

pub fn confirmation_line(engine: &str, destination: &Path) -> String {
    format!("[sales_report] {engine} result written -> {}", destination.display())
}
