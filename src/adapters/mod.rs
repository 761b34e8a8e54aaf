mod duckdb_command;
mod nifi_http;

pub use duckdb_command::DuckDbCommandAdapter;
pub use nifi_http::HttpNifiClient;
