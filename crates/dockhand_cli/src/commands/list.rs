//! List command - browse the app catalog.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use dockhand_apps::AppRepository;

#[derive(Args)]
pub struct ListArgs {
    /// Only show apps in this category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,
}

pub async fn execute(repository_path: &Path, args: ListArgs) -> Result<()> {
    let repository = AppRepository::new(repository_path);

    let mut apps = match &args.category {
        Some(category) => repository.get_by_category(category)?,
        None => repository.get_all()?,
    };

    if apps.is_empty() {
        println!("No apps found in {}", repository_path.display());
        return Ok(());
    }

    apps.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

    println!("📦 {} app(s) available", apps.len());
    for app in &apps {
        println!(
            "   {} ({}) v{} [{}]",
            app.metadata.name, app.metadata.id, app.metadata.version, app.metadata.category
        );
        println!("      {}", app.metadata.description);
    }

    if args.category.is_none() {
        let categories = repository.categories()?;
        println!();
        println!("Categories: {}", categories.join(", "));
    }

    Ok(())
}
