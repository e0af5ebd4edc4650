// crates/usecase/src/dto.rs
use std::{fmt, path::PathBuf};

use sales_report_domain::{AgeBand, Comparison, PipelineStats};

/// One of the two ways of computing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// The store evaluates a single SQL statement.
    Sql,
    /// Tables are read separately and aggregated in memory.
    Memory,
}

impl Engine {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sql => "SQL",
            Self::Memory => "In-memory",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which engines a run executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineSelection {
    #[default]
    Both,
    Sql,
    Memory,
}

impl EngineSelection {
    pub fn engines(self) -> &'static [Engine] {
        match self {
            Self::Both => &[Engine::Sql, Engine::Memory],
            Self::Sql => &[Engine::Sql],
            Self::Memory => &[Engine::Memory],
        }
    }
}

/// Everything a run needs to know besides the adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    pub band: AgeBand,
    pub engines: EngineSelection,
    pub sql_output: PathBuf,
    pub memory_output: PathBuf,
    /// Fail the run when the engines disagree.
    pub strict: bool,
}

impl ReportPlan {
    pub fn destination(&self, engine: Engine) -> &PathBuf {
        match engine {
            Engine::Sql => &self.sql_output,
            Engine::Memory => &self.memory_output,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutcome {
    pub engine: Engine,
    pub destination: PathBuf,
    pub rows: usize,
    /// Only filled for the in-memory engine.
    pub stats: Option<PipelineStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    pub outcomes: Vec<EngineOutcome>,
    /// Present when both engines ran.
    pub comparison: Option<Comparison>,
}
