mod nifi;
mod sql_shell;

pub use nifi::{CreateOutcome, NifiClient, ProcessGroupRef};
pub use sql_shell::SqlShell;
