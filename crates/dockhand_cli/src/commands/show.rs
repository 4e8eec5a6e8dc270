//! Show command - one app's full definition.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use dockhand_apps::AppRepository;

#[derive(Args)]
pub struct ShowArgs {
    /// Id of the app to show
    id: String,
}

pub async fn execute(repository_path: &Path, args: ShowArgs) -> Result<()> {
    let repository = AppRepository::new(repository_path);

    let app = repository
        .get_by_id(&args.id)?
        .ok_or_else(|| anyhow::anyhow!("App not found: {}", args.id))?;

    let metadata = &app.metadata;
    println!("📦 {} v{}", metadata.name, metadata.version);
    println!("   {}", metadata.description);
    println!("   id: {}  category: {}", metadata.id, metadata.category);
    if !metadata.tags.is_empty() {
        println!("   tags: {}", metadata.tags.join(", "));
    }
    if let Some(maintainer) = &metadata.maintainer {
        println!("   maintainer: {}", maintainer);
    }
    if let Some(documentation) = &metadata.documentation {
        println!("   docs: {}", documentation);
    }

    println!();
    println!(
        "🐳 Image: {} (restart: {})",
        app.docker.image, app.docker.restart_policy
    );

    if !app.configuration.fields.is_empty() {
        println!();
        println!("⚙️  Configuration:");
        for field in &app.configuration.fields {
            let required = if field.is_required() { " (required)" } else { "" };
            println!(
                "   {} [{}] → {}{}",
                field.label,
                field.field_type.as_str(),
                field.env_var,
                required
            );
        }
    }

    if !app.volumes.is_empty() {
        println!();
        println!("💾 Volumes:");
        for volume in &app.volumes {
            println!("   {} - {}", volume.container_path, volume.description);
        }
    }

    if !app.ports.is_empty() {
        println!();
        println!("🔌 Ports:");
        for port in &app.ports {
            let host_port = port.default_host_port.unwrap_or(port.container_port);
            println!(
                "   {}:{}/{} - {}",
                port.container_port,
                host_port,
                port.protocol.as_str(),
                port.description
            );
        }
    }

    if let Some(health) = &app.health_check {
        println!();
        println!(
            "❤️  Health check: {} every {}s ({} retries)",
            health.check_type.as_str(),
            health.interval,
            health.retries
        );
    }

    Ok(())
}
