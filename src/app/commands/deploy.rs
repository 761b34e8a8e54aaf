//! Deploy command execution logic.

use std::path::Path;

use crate::adapters::HttpNifiClient;
use crate::domain::{AppError, DeployConfig, FlowDefinition, NifiConfig, process_group_name};
use crate::ports::{CreateOutcome, NifiClient, ProcessGroupRef};

/// Result of a deployment run.
#[derive(Debug)]
pub struct DeployReport {
    /// The resolved environment process group.
    pub group: ProcessGroupRef,
    /// Whether this run created the group (false = found existing).
    pub created: bool,
    /// Browser URL for the resolved group.
    pub view_url: String,
}

/// Execute the deploy command.
pub fn execute(
    environment: &str,
    flow_file: &Path,
    config_file: &Path,
) -> Result<DeployReport, AppError> {
    println!("🚀 Deploying flow to {} environment...", environment);

    let config = DeployConfig::load(config_file)?;
    // The definition must parse before the server is touched; its content is
    // not uploaded by this command.
    FlowDefinition::load(flow_file)?;

    println!("📤 Connecting to NiFi...");
    let client = HttpNifiClient::new(&config.nifi)?;
    deploy_with_client(environment, &config.nifi, &client)
}

/// Run the deployment sequence against a NiFi client.
fn deploy_with_client<C: NifiClient>(
    environment: &str,
    config: &NifiConfig,
    client: &C,
) -> Result<DeployReport, AppError> {
    let token = client.request_token(&config.username, &config.password)?;
    println!("✅ Authentication successful");

    let root_id = client.root_process_group(&token)?;
    println!("📦 Root process group ID: {}", root_id);

    let name = process_group_name(environment);
    println!("📤 Creating process group: {}...", name);
    let (group, created) = ensure_process_group(client, &token, &root_id, &name)?;
    if created {
        println!("✅ Process group created successfully");
    }
    println!("📦 Process group ID: {}", group.id);

    let view_url = format!(
        "{}/nifi/?processGroupId={}",
        config.url.as_str().trim_end_matches('/'),
        group.id
    );

    Ok(DeployReport { group, created, view_url })
}

/// Locate or create the group named `name` under `parent_id`.
///
/// Creation is idempotent: a name conflict falls back to listing the parent's
/// children and taking the first one whose name matches. The API does not
/// enforce name uniqueness; the first match wins.
pub fn ensure_process_group<C: NifiClient>(
    client: &C,
    token: &str,
    parent_id: &str,
    name: &str,
) -> Result<(ProcessGroupRef, bool), AppError> {
    match client.create_process_group(token, parent_id, name)? {
        CreateOutcome::Created(group) => Ok((group, true)),
        CreateOutcome::NameConflict => {
            println!("⚠️  Process group already exists, finding existing...");
            let children = client.list_child_groups(token, parent_id)?;
            let group = children
                .into_iter()
                .find(|child| child.name == name)
                .ok_or_else(|| AppError::GroupMissingAfterConflict(name.to_string()))?;
            Ok((group, false))
        }
    }
}
