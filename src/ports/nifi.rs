//! NiFi REST client port definition.

use crate::domain::AppError;

/// A process group in the NiFi resource tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessGroupRef {
    /// Server-assigned identifier.
    pub id: String,
    /// Component name.
    pub name: String,
}

/// Outcome of a process group creation attempt.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The server created the group.
    Created(ProcessGroupRef),
    /// A group with that name already exists under the parent (HTTP 409).
    NameConflict,
}

/// Port for the NiFi REST operations the deployer consumes.
///
/// Every call is a single attempt: non-success statuses surface as errors and
/// nothing is retried.
pub trait NifiClient {
    /// Exchange credentials for a bearer token at the token endpoint.
    ///
    /// The response body is the bare token, not a structured document.
    fn request_token(&self, username: &str, password: &str) -> Result<String, AppError>;

    /// Fetch the root process group and return its identifier.
    fn root_process_group(&self, token: &str) -> Result<String, AppError>;

    /// Create a child process group named `name` under `parent_id`.
    fn create_process_group(
        &self,
        token: &str,
        parent_id: &str,
        name: &str,
    ) -> Result<CreateOutcome, AppError>;

    /// List the child process groups of `parent_id`.
    fn list_child_groups(
        &self,
        token: &str,
        parent_id: &str,
    ) -> Result<Vec<ProcessGroupRef>, AppError>;
}
