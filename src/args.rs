// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::{
    config::{DEFAULT_MEMORY_OUTPUT, DEFAULT_SQL_OUTPUT},
    value_enum::CliEngine,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sales_report",
    version = crate::VERSION,
    about = "Total quantity per item bought by customers aged 18-35, computed by SQL and in memory"
)]
pub struct Args {
    /// SQLite database containing the customers, sales, orders and items tables
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub db: PathBuf,

    /// Destination of the SQL engine's report
    #[arg(long, default_value = DEFAULT_SQL_OUTPUT, value_hint = ValueHint::FilePath)]
    pub out_sql: PathBuf,

    /// Destination of the in-memory engine's report
    #[arg(
        long = "out-pandas",
        visible_alias = "out-memory",
        default_value = DEFAULT_MEMORY_OUTPUT,
        value_hint = ValueHint::FilePath
    )]
    pub out_memory: PathBuf,

    /// Which engine(s) to run
    #[arg(long, value_enum, default_value = "both")]
    pub engine: CliEngine,

    /// Exit with an error when the two engines disagree
    #[arg(long)]
    pub strict: bool,

    /// Raise log verbosity on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
