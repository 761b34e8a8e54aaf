//! NiFi REST client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, NifiConfig};
use crate::ports::{CreateOutcome, NifiClient, ProcessGroupRef};

const DEFAULT_STATUS_MESSAGE: &str = "NiFi API request failed";

/// HTTP transport for the NiFi REST API.
///
/// Each call performs a single request; there is no retry. Certificate
/// acceptance is per-client configuration, not process-wide state.
#[derive(Debug, Clone)]
pub struct HttpNifiClient {
    base_url: Url,
    client: Client,
}

impl HttpNifiClient {
    /// Create a new HTTP client from the NiFi connection settings.
    pub fn new(config: &NifiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.url.clone(), client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn read_response(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        (status, body)
    }

    fn status_error(status: StatusCode, body: &str) -> AppError {
        let message = if body.trim().is_empty() {
            DEFAULT_STATUS_MESSAGE.to_string()
        } else {
            body.trim().to_string()
        };
        AppError::NifiApi { status: status.as_u16(), message }
    }

    fn parse_error(status: StatusCode, err: serde_json::Error) -> AppError {
        AppError::NifiApi {
            status: status.as_u16(),
            message: format!("Failed to parse response: {}", err),
        }
    }
}

impl NifiClient for HttpNifiClient {
    fn request_token(&self, username: &str, password: &str) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.endpoint("nifi-api/access/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let (status, body) = Self::read_response(response);
        if status.is_success() {
            // The token endpoint returns the bare token as the body.
            return Ok(body);
        }

        Err(Self::status_error(status, &body))
    }

    fn root_process_group(&self, token: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(self.endpoint("nifi-api/flow/process-groups/root"))
            .bearer_auth(token)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let (status, body) = Self::read_response(response);
        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let envelope: ProcessGroupFlowEnvelope =
            serde_json::from_str(&body).map_err(|e| Self::parse_error(status, e))?;
        Ok(envelope.process_group_flow.id)
    }

    fn create_process_group(
        &self,
        token: &str,
        parent_id: &str,
        name: &str,
    ) -> Result<CreateOutcome, AppError> {
        let request = CreateGroupRequest {
            revision: Revision { version: 0 },
            component: NewGroupComponent {
                name: name.to_string(),
                position: Position { x: 100.0, y: 100.0 },
            },
        };

        let response = self
            .client
            .post(self.endpoint(&format!("nifi-api/process-groups/{}/process-groups", parent_id)))
            .bearer_auth(token)
            .json(&request)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let (status, body) = Self::read_response(response);
        match status {
            StatusCode::CREATED => {
                let entity: GroupEntity =
                    serde_json::from_str(&body).map_err(|e| Self::parse_error(status, e))?;
                Ok(CreateOutcome::Created(ProcessGroupRef {
                    id: entity.id,
                    name: entity.component.name,
                }))
            }
            StatusCode::CONFLICT => Ok(CreateOutcome::NameConflict),
            _ => Err(Self::status_error(status, &body)),
        }
    }

    fn list_child_groups(
        &self,
        token: &str,
        parent_id: &str,
    ) -> Result<Vec<ProcessGroupRef>, AppError> {
        let response = self
            .client
            .get(self.endpoint(&format!("nifi-api/flow/process-groups/{}", parent_id)))
            .bearer_auth(token)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let (status, body) = Self::read_response(response);
        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let envelope: ProcessGroupFlowEnvelope =
            serde_json::from_str(&body).map_err(|e| Self::parse_error(status, e))?;
        Ok(envelope
            .process_group_flow
            .flow
            .process_groups
            .into_iter()
            .map(|entity| ProcessGroupRef { id: entity.id, name: entity.component.name })
            .collect())
    }
}

#[derive(Debug, Serialize)]
struct CreateGroupRequest {
    revision: Revision,
    component: NewGroupComponent,
}

#[derive(Debug, Serialize)]
struct Revision {
    version: u32,
}

#[derive(Debug, Serialize)]
struct NewGroupComponent {
    name: String,
    position: Position,
}

#[derive(Debug, Serialize)]
struct Position {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProcessGroupFlowEnvelope {
    process_group_flow: ProcessGroupFlowBody,
}

#[derive(Debug, Deserialize)]
struct ProcessGroupFlowBody {
    id: String,
    #[serde(default)]
    flow: FlowListing,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlowListing {
    #[serde(default)]
    process_groups: Vec<GroupEntity>,
}

#[derive(Debug, Deserialize)]
struct GroupEntity {
    id: String,
    component: GroupComponent,
}

#[derive(Debug, Deserialize)]
struct GroupComponent {
    name: String,
}
