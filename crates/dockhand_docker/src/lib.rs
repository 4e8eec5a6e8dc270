//! # dockhand_docker
//!
//! Container runtime client for Dockhand.
//!
//! The catalog itself never manages container lifecycle; this crate only
//! reports what the local daemon knows: whether it is reachable and which
//! containers exist. Callers depend on the [`ContainerClient`] trait so
//! tests can substitute the [`MockClient`].

pub mod client;
pub mod error;
pub mod mock;

pub use client::{ContainerClient, ContainerInfo, ContainerState, DockerClient};
pub use error::{DockerError, DockerResult};
pub use mock::MockClient;
