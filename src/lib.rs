//! flowctl: deploy NiFi flow definitions and drive DuckDB-backed pipeline checks.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::DuckDbCommandAdapter;
use app::commands::{deploy, run_tests, validate};

pub use app::commands::deploy::DeployReport;
pub use app::commands::run_tests::{TestRunOptions, TestRunOutcome};
pub use domain::{AppError, FlowSummary};

/// Deploy the environment's process group described by the config file.
///
/// The flow file must exist and parse, but its content is not uploaded.
pub fn deploy(
    environment: &str,
    flow_file: &Path,
    config_file: &Path,
) -> Result<DeployReport, AppError> {
    let report = deploy::execute(environment, flow_file, config_file)?;

    println!("✅ Deployment completed successfully!");
    println!("🌐 View flow at: {}", report.view_url);
    Ok(report)
}

/// Validate a flow definition's JSON structure.
pub fn validate(flow_file: &Path) -> Result<FlowSummary, AppError> {
    let summary = validate::execute(flow_file)?;

    match summary.processor_count {
        Some(count) => println!("✅ Found {} processors in flow", count),
        None => println!("⚠️  No processors found in flow"),
    }
    println!("✅ Flow validation passed");
    Ok(summary)
}

/// Run the pipeline test suite through the DuckDB CLI at `duckdb_bin`.
pub fn run_tests(options: &TestRunOptions, duckdb_bin: &Path) -> Result<TestRunOutcome, AppError> {
    let shell = DuckDbCommandAdapter::new(duckdb_bin);
    let outcome = run_tests::execute(options, &shell)?;

    if outcome.passed {
        println!("✅ All tests passed!");
    } else {
        println!("❌ Some tests failed!");
    }
    Ok(outcome)
}
