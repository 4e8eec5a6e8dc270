//! Search command - find apps by name, description, or tag.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use dockhand_apps::AppRepository;

#[derive(Args)]
pub struct SearchArgs {
    /// Query matched case-insensitively against name, description, and tags
    query: String,
}

pub async fn execute(repository_path: &Path, args: SearchArgs) -> Result<()> {
    let repository = AppRepository::new(repository_path);

    let mut apps = repository.search(&args.query)?;
    if apps.is_empty() {
        println!("No apps match \"{}\"", args.query);
        return Ok(());
    }

    apps.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

    println!("🔍 {} match(es) for \"{}\"", apps.len(), args.query);
    for app in &apps {
        let tags = if app.metadata.tags.is_empty() {
            String::new()
        } else {
            format!(" #{}", app.metadata.tags.join(" #"))
        };
        println!(
            "   {} ({}) - {}{}",
            app.metadata.name, app.metadata.id, app.metadata.description, tags
        );
    }

    Ok(())
}
