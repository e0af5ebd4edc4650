// src/value_enum.rs
use clap::ValueEnum;
use sales_report_usecase::EngineSelection;

/// Engines selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliEngine {
    /// Run both and cross-check the results
    #[default]
    Both,
    /// Only the SQL query
    Sql,
    /// Only the in-memory join and aggregation
    Memory,
}

impl From<CliEngine> for EngineSelection {
    fn from(value: CliEngine) -> Self {
        match value {
            CliEngine::Both => Self::Both,
            CliEngine::Sql => Self::Sql,
            CliEngine::Memory => Self::Memory,
        }
    }
}
