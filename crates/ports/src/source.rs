// crates/ports/src/source.rs
use sales_report_domain::{AgeBand, AggregatedLine, Table, TableSchema};
use sales_report_shared_kernel::Result;

/// Port for reading raw tables out of the data source.
pub trait TableSource {
    /// Read every row of `schema.name`.
    ///
    /// A missing table is a schema error. Column presence is checked by the caller.
    fn read_table(&self, schema: &TableSchema) -> Result<Table>;
}

/// Port for stores that can evaluate the report query themselves.
pub trait RelationalAggregation {
    /// Join, filter, group, apply the positive-total filter and order, in one statement.
    fn aggregate(&self, band: AgeBand) -> Result<Vec<AggregatedLine>>;
}
