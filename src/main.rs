// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use sales_report::{app, args::Args, config::ReportConfig, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = ReportConfig::try_from(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| app::run(&config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
