//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::commands::run_tests::TestRunOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "flowctl")]
#[command(version)]
#[command(
    about = "Deploy NiFi flow definitions and run pipeline checks",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a flow definition to the target environment
    #[clap(visible_alias = "d")]
    Deploy {
        /// Target environment (e.g. dev, staging, prod)
        environment: String,
        /// Path to the flow definition JSON
        flow_file: PathBuf,
        /// Path to the deploy config file
        config_file: PathBuf,
    },
    /// Validate a flow definition's JSON structure
    #[clap(visible_alias = "v")]
    Validate {
        /// Path to the flow definition JSON
        flow_file: PathBuf,
    },
    /// Run schema setup, data loading, and validation checks through DuckDB
    #[clap(visible_alias = "t")]
    RunTests {
        /// Path to the database file
        db_path: PathBuf,
        /// CSV file with test data for the customers table
        test_data_csv: PathBuf,
        /// SQL script with the test-query suite
        test_queries_sql: PathBuf,
        /// SQL script creating the schema
        #[arg(long, default_value = "sql/schema.sql")]
        schema_sql: PathBuf,
        /// SQL script with data-quality validation queries
        #[arg(long, default_value = "sql/validation-queries.sql")]
        validation_sql: PathBuf,
        /// DuckDB executable to invoke
        #[arg(long, default_value = "duckdb")]
        duckdb_bin: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Deploy { environment, flow_file, config_file } => {
            crate::deploy(&environment, &flow_file, &config_file).map(|_| 0)
        }
        Commands::Validate { flow_file } => crate::validate(&flow_file).map(|_| 0),
        Commands::RunTests {
            db_path,
            test_data_csv,
            test_queries_sql,
            schema_sql,
            validation_sql,
            duckdb_bin,
        } => {
            let options = TestRunOptions {
                database: db_path,
                test_data_csv,
                test_queries_sql,
                schema_sql,
                validation_sql,
            };
            crate::run_tests(&options, &duckdb_bin)
                .map(|outcome| if outcome.passed { 0 } else { 1 })
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
