//! Status command - daemon health and container listing.

use anyhow::Result;
use clap::Args;

use dockhand_docker::{ContainerClient, DockerClient};

#[derive(Args)]
pub struct StatusArgs {
    /// Include stopped containers
    #[arg(short, long)]
    all: bool,

    /// Path to the Docker daemon socket
    #[arg(long)]
    socket: Option<String>,
}

pub async fn execute(args: StatusArgs) -> Result<()> {
    let client = match &args.socket {
        Some(socket) => DockerClient::with_socket(socket)?,
        None => DockerClient::new()?,
    };

    if !client.ping().await {
        anyhow::bail!("Unable to connect to Docker daemon. Is Docker running?");
    }
    println!("🐳 Docker daemon is reachable");

    let containers = client.list_containers(args.all).await?;
    if containers.is_empty() {
        println!("No containers found");
        return Ok(());
    }

    println!("{} container(s):", containers.len());
    for container in &containers {
        println!(
            "   {} {} ({}) - {} [{}]",
            container.id,
            container.name,
            container.image,
            container.status,
            container.state.as_str()
        );
    }

    Ok(())
}
