// crates/infra/src/sqlite/query.rs
use rusqlite::{Row, params};
use sales_report_domain::{AgeBand, AggregatedLine, Cell};
use sales_report_ports::source::RelationalAggregation;
use sales_report_shared_kernel::{InfrastructureError, ReportError, Result};

use super::{SqliteSource, cell_from_ref};

/// The whole report as one statement. `?1`/`?2` bind the inclusive age band.
pub const REPORT_QUERY: &str = "\
SELECT c.customer_id AS Customer,
       c.age AS Age,
       it.item_name AS Item,
       CAST(SUM(o.quantity) AS INTEGER) AS Quantity
FROM customers c
JOIN sales s ON s.customer_id = c.customer_id
JOIN orders o ON o.sales_id = s.sales_id
JOIN items it ON it.item_id = o.item_id
WHERE c.age BETWEEN ?1 AND ?2
  AND o.quantity IS NOT NULL
GROUP BY c.customer_id, c.age, it.item_name
HAVING SUM(o.quantity) > 0
ORDER BY c.customer_id, it.item_name";

impl RelationalAggregation for SqliteSource {
    fn aggregate(&self, band: AgeBand) -> Result<Vec<AggregatedLine>> {
        let mut stmt = self.conn.prepare(REPORT_QUERY).map_err(|err| Self::query_error(&err))?;
        let mut rows = stmt
            .query(params![band.min(), band.max()])
            .map_err(|err| Self::query_error(&err))?;

        let mut lines = Vec::new();
        while let Some(row) = rows.next().map_err(|err| Self::query_error(&err))? {
            lines.push(line_from_row(row)?);
        }
        tracing::debug!(lines = lines.len(), "relational aggregation finished");
        Ok(lines)
    }
}

fn line_from_row(row: &Row<'_>) -> Result<AggregatedLine> {
    let cell = |i: usize| row.get_ref(i).map(cell_from_ref).map_err(|err| SqliteSource::query_error(&err));
    let integer = |i: usize, column: &str| -> Result<i64> {
        let value = cell(i)?;
        value.as_integer().ok_or_else(|| unexpected(column, &value))
    };

    Ok(AggregatedLine {
        customer: integer(0, "Customer")?,
        age: integer(1, "Age")?,
        item: cell(2)?.to_text(),
        quantity: integer(3, "Quantity")?,
    })
}

fn unexpected(column: &str, value: &Cell) -> ReportError {
    InfrastructureError::Query { details: format!("column {column} holds non-integer value {value}") }.into()
}
