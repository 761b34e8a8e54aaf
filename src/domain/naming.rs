//! Process group naming convention.

/// Fixed prefix for environment process groups.
pub const GROUP_PREFIX: &str = "Customer-ETL";

/// Derived process group name for an environment, e.g. `Customer-ETL-STAGING`.
pub fn process_group_name(environment: &str) -> String {
    format!("{}-{}", GROUP_PREFIX, environment.to_uppercase())
}
