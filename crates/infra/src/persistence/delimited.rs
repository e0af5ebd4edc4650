// crates/infra/src/persistence/delimited.rs
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use sales_report_domain::AggregatedLine;
use sales_report_ports::sink::ReportSink;
use sales_report_shared_kernel::{InfraResult, InfrastructureError, Result};

use crate::persistence::file_writer::FileWriter;

/// Writes reports as delimited text: a header, then one `\n`-terminated record per line.
///
/// Fields are quoted only when they contain the delimiter, a double quote or a
/// line break; embedded quotes are doubled.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedWriter {
    delimiter: u8,
}

impl DelimitedWriter {
    pub const DEFAULT_DELIMITER: u8 = b';';

    pub fn new() -> Self {
        Self { delimiter: Self::DEFAULT_DELIMITER }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Serialise `lines` into memory.
    pub fn render(&self, lines: &[AggregatedLine]) -> InfraResult<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer.write_record(AggregatedLine::HEADER).map_err(csv_error)?;
        for line in lines {
            writer.serialize(line).map_err(csv_error)?;
        }
        writer.into_inner().map_err(|err| InfrastructureError::SerializationError {
            format: "CSV".to_string(),
            details: err.to_string(),
        })
    }
}

impl Default for DelimitedWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for DelimitedWriter {
    fn write(&self, lines: &[AggregatedLine], destination: &Path) -> Result<()> {
        let bytes = self.render(lines)?;
        FileWriter::atomic_write(destination, &bytes).map_err(|source| InfrastructureError::FileWrite {
            path: destination.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %destination.display(), bytes = bytes.len(), "report file persisted");
        Ok(())
    }
}

fn csv_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::SerializationError { format: "CSV".to_string(), details: err.to_string() }
}
