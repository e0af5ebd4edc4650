use sales_report_domain::{
    AgeBand, AggregatedLine, Comparison, Dataset, InMemoryAggregator, PipelineStats, TableSchema,
    analytics::compare,
};
use sales_report_ports::{
    progress::ReportNotifier,
    sink::ReportSink,
    source::{RelationalAggregation, TableSource},
};
use sales_report_shared_kernel::{ApplicationError, ErrorContext, ReportError, Result};

use crate::dto::{Engine, EngineOutcome, ReportOutput, ReportPlan};

pub struct BuildReport<'a> {
    tables: &'a dyn TableSource,
    relational: &'a dyn RelationalAggregation,
    sink: &'a dyn ReportSink,
    notifier: Option<&'a dyn ReportNotifier>,
}

impl<'a> BuildReport<'a> {
    pub fn new(
        tables: &'a dyn TableSource,
        relational: &'a dyn RelationalAggregation,
        sink: &'a dyn ReportSink,
        notifier: Option<&'a dyn ReportNotifier>,
    ) -> Self {
        Self { tables, relational, sink, notifier }
    }

    /// Run every engine the plan selects, write each report, then cross-check.
    ///
    /// Both files are written before a divergence is reported, so a strict
    /// failure still leaves them on disk for inspection.
    pub fn run(&self, plan: &ReportPlan) -> Result<ReportOutput> {
        let mut outcomes = Vec::new();
        let mut results: Vec<Vec<AggregatedLine>> = Vec::new();

        for &engine in plan.engines.engines() {
            let (lines, stats) = self.compute(engine, plan.band)?;
            let destination = plan.destination(engine);
            self.sink
                .write(&lines, destination)
                .with_context(|| format!("writing {engine} result"))?;
            tracing::info!(%engine, rows = lines.len(), path = %destination.display(), "report written");
            if let Some(notifier) = self.notifier {
                notifier.written(engine.label(), destination, lines.len());
            }
            outcomes.push(EngineOutcome { engine, destination: destination.clone(), rows: lines.len(), stats });
            results.push(lines);
        }

        let comparison = match results.as_slice() {
            [sql, memory] => Some(compare(sql, memory)),
            _ => None,
        };
        if let Some(Comparison::Diverged(divergence)) = &comparison {
            tracing::warn!(%divergence, "SQL and in-memory results differ");
            if plan.strict {
                return Err(ApplicationError::EngineDivergence { details: divergence.to_string() }.into());
            }
        }

        Ok(ReportOutput { outcomes, comparison })
    }

    pub fn compute(&self, engine: Engine, band: AgeBand) -> Result<(Vec<AggregatedLine>, Option<PipelineStats>)> {
        let computed = match engine {
            Engine::Sql => self.relational.aggregate(band).map(|lines| (lines, None)),
            Engine::Memory => self.in_memory(band).map(|(lines, stats)| (lines, Some(stats))),
        };
        computed.map_err(|source| {
            ApplicationError::EngineFailed { engine: engine.to_string(), source: Box::new(source) }.into()
        })
    }

    fn in_memory(&self, band: AgeBand) -> Result<(Vec<AggregatedLine>, PipelineStats)> {
        let customers = self.tables.read_table(&TableSchema::CUSTOMERS)?;
        let sales = self.tables.read_table(&TableSchema::SALES)?;
        let orders = self.tables.read_table(&TableSchema::ORDERS)?;
        let items = self.tables.read_table(&TableSchema::ITEMS)?;
        let dataset = Dataset::from_tables(&customers, &sales, &orders, &items).map_err(ReportError::from)?;
        InMemoryAggregator::new(band).compute_with_stats(&dataset).map_err(ReportError::from)
    }
}
