// crates/infra/src/sqlite/source.rs
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use sales_report_domain::{Table, TableSchema};
use sales_report_ports::source::TableSource;
use sales_report_shared_kernel::{DomainError, InfrastructureError, ReportError, Result};

use super::cell_from_ref;

/// Read-only handle on a SQLite database holding the four source tables.
///
/// The connection closes when the handle is dropped; [`SqliteSource::close`]
/// does the same but reports a failing close.
pub struct SqliteSource {
    pub(super) conn: Connection,
    path: PathBuf,
}

impl SqliteSource {
    /// Open an existing database. Never creates a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|err| connection_error(path, &err))?;

        // SQLite opens lazily; touching the catalog is what rejects non-database files.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
            .map_err(|err| connection_error(path, &err))?;

        tracing::debug!(path = %path.display(), "data source opened");
        Ok(Self { conn, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn close(self) -> Result<()> {
        let Self { conn, path } = self;
        conn.close().map_err(|(_, err)| connection_error(&path, &err))?;
        tracing::debug!(path = %path.display(), "data source closed");
        Ok(())
    }

    fn has_table(&self, name: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1 COLLATE NOCASE",
                [name],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .map_err(|err| connection_error(&self.path, &err))
    }

    pub(super) fn query_error(err: &rusqlite::Error) -> ReportError {
        InfrastructureError::Query { details: err.to_string() }.into()
    }
}

impl TableSource for SqliteSource {
    fn read_table(&self, schema: &TableSchema) -> Result<Table> {
        if !self.has_table(schema.name)? {
            return Err(DomainError::MissingTable { table: schema.name.to_string() }.into());
        }

        let sql = format!("SELECT * FROM {}", quote_identifier(schema.name));
        let read_error = |err: rusqlite::Error| connection_error(&self.path, &err);
        let mut stmt = self.conn.prepare(&sql).map_err(read_error)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();
        let mut table = Table::new(schema.name, columns);
        // Fail on a missing column before pulling any rows.
        table.project(schema)?;

        let mut rows = stmt.query([]).map_err(read_error)?;
        while let Some(row) = rows.next().map_err(read_error)? {
            let cells = (0..width)
                .map(|i| row.get_ref(i).map(cell_from_ref))
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(read_error)?;
            table.push_row(cells);
        }

        tracing::debug!(table = schema.name, rows = table.len(), "table read");
        Ok(table)
    }
}

fn connection_error(path: &Path, err: &rusqlite::Error) -> ReportError {
    InfrastructureError::Connection { path: path.to_path_buf(), details: err.to_string() }.into()
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
