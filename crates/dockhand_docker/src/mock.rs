//! Mock container client for testing.
//!
//! Provides a configurable implementation of the [`ContainerClient`] trait
//! for exercising callers without a running daemon.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::client::{ContainerClient, ContainerInfo, ContainerState};
use crate::error::{DockerError, DockerResult};

/// Canned-response container client.
#[derive(Clone)]
pub struct MockClient {
    available: Arc<RwLock<bool>>,
    containers: Arc<RwLock<Vec<ContainerInfo>>>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// Create a mock client that reports as available with no containers.
    pub fn new() -> Self {
        Self {
            available: Arc::new(RwLock::new(true)),
            containers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Control whether the mock daemon responds to pings.
    pub fn set_available(&self, available: bool) {
        *self.available.write() = available;
    }

    /// Add a container to the mock daemon's listing.
    pub fn push_container(&self, container: ContainerInfo) {
        self.containers.write().push(container);
    }
}

#[async_trait]
impl ContainerClient for MockClient {
    async fn ping(&self) -> bool {
        *self.available.read()
    }

    async fn list_containers(&self, all: bool) -> DockerResult<Vec<ContainerInfo>> {
        if !*self.available.read() {
            return Err(DockerError::Connection("mock daemon offline".to_string()));
        }

        let containers = self.containers.read().clone();
        if all {
            return Ok(containers);
        }

        Ok(containers
            .into_iter()
            .filter(|container| container.state == ContainerState::Running)
            .collect())
    }
}
