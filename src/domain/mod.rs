//! Domain types for flow deployment and pipeline checks.

mod config;
mod error;
mod flow;
mod naming;

pub use config::{DeployConfig, NifiConfig};
pub use error::AppError;
pub use flow::{FlowDefinition, FlowSummary};
pub use naming::{GROUP_PREFIX, process_group_name};
