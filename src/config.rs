// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use sales_report_domain::AgeBand;
use sales_report_shared_kernel::{PresentationError, PresentationResult};
use sales_report_usecase::{EngineSelection, ReportPlan};

use crate::args::Args;

pub const DEFAULT_SQL_OUTPUT: &str = "output_sql.csv";
pub const DEFAULT_MEMORY_OUTPUT: &str = "output_pandas.csv";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ReportConfig {
    pub db: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_SQL_OUTPUT)")]
    pub out_sql: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_MEMORY_OUTPUT)")]
    pub out_memory: PathBuf,
    #[builder(default)]
    pub engines: EngineSelection,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub band: AgeBand,
}

impl ReportConfig {
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    pub fn plan(&self) -> ReportPlan {
        ReportPlan {
            band: self.band,
            engines: self.engines,
            sql_output: self.out_sql.clone(),
            memory_output: self.out_memory.clone(),
            strict: self.strict,
        }
    }

    fn validate(self) -> PresentationResult<Self> {
        if self.engines == EngineSelection::Both && self.out_sql == self.out_memory {
            return Err(PresentationError::InvalidValue {
                flag: "--out-pandas".to_string(),
                value: self.out_memory.display().to_string(),
                reason: "must differ from --out-sql when both engines run".to_string(),
            });
        }
        Ok(self)
    }
}

impl TryFrom<Args> for ReportConfig {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        ReportConfig::builder()
            .db(args.db)
            .out_sql(args.out_sql)
            .out_memory(args.out_memory)
            .engines(EngineSelection::from(args.engine))
            .strict(args.strict)
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))?
            .validate()
    }
}
