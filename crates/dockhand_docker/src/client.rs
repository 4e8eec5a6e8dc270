//! Docker implementation of the container client.

use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::models::ContainerSummary as DaemonContainer;
use bollard::Docker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DockerError, DockerResult};

/// Lifecycle state reported by the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Created,
    Dead,
    #[serde(other)]
    Unknown,
}

impl ContainerState {
    /// Map the daemon's state string onto the closed enum.
    pub fn from_daemon(state: &str) -> Self {
        match state {
            "running" => ContainerState::Running,
            "paused" => ContainerState::Paused,
            "restarting" => ContainerState::Restarting,
            "removing" => ContainerState::Removing,
            "exited" => ContainerState::Exited,
            "created" => ContainerState::Created,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Running => "running",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Removing => "removing",
            ContainerState::Exited => "exited",
            ContainerState::Created => "created",
            ContainerState::Dead => "dead",
            ContainerState::Unknown => "unknown",
        }
    }
}

/// One container as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Short 12-character id, the form the docker CLI shows
    pub id: String,
    /// Name with the daemon's leading slash stripped
    pub name: String,
    pub image: String,
    /// Human-readable status line, e.g. "Up 2 hours"
    pub status: String,
    pub state: ContainerState,
    pub created: Option<DateTime<Utc>>,
}

/// Client for a local container runtime.
#[async_trait]
pub trait ContainerClient: Send + Sync {
    /// Check whether the daemon responds; resolves to a boolean, never an error.
    async fn ping(&self) -> bool;

    /// List containers, optionally including stopped ones.
    async fn list_containers(&self, all: bool) -> DockerResult<Vec<ContainerInfo>>;
}

/// Bollard-backed client for the local Docker daemon.
pub struct DockerClient {
    client: Docker,
}

impl DockerClient {
    /// Connect with the platform's default socket.
    pub fn new() -> DockerResult<Self> {
        let client = Docker::connect_with_local_defaults()
            .map_err(|e| DockerError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    /// Connect to a specific daemon socket.
    pub fn with_socket(path: &str) -> DockerResult<Self> {
        let client = Docker::connect_with_socket(path, 120, bollard::API_DEFAULT_VERSION)
            .map_err(|e| DockerError::Connection(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContainerClient for DockerClient {
    async fn ping(&self) -> bool {
        match self.client.ping().await {
            Ok(_) => true,
            Err(error) => {
                debug!("Docker ping failed: {}", error);
                false
            }
        }
    }

    async fn list_containers(&self, all: bool) -> DockerResult<Vec<ContainerInfo>> {
        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        let containers = self.client.list_containers(Some(options)).await?;
        debug!("Daemon reported {} container(s)", containers.len());

        Ok(containers.into_iter().map(summarize).collect())
    }
}

fn summarize(container: DaemonContainer) -> ContainerInfo {
    let name = container
        .names
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|name| format_name(&name))
        .unwrap_or_default();

    ContainerInfo {
        id: short_id(container.id.as_deref().unwrap_or_default()),
        name,
        image: container.image.unwrap_or_default(),
        status: container.status.unwrap_or_default(),
        state: ContainerState::from_daemon(container.state.as_deref().unwrap_or_default()),
        created: container
            .created
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
    }
}

// The daemon reports names with a leading slash.
fn format_name(name: &str) -> String {
    name.strip_prefix('/').unwrap_or(name).to_string()
}

fn short_id(id: &str) -> String {
    id.chars().take(12).collect()
}
