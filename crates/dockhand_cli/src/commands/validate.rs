//! Validate command - check configuration values against an app's schema.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use dockhand_apps::AppRepository;
use dockhand_validation::{is_port_available, ConfigValidator};

use crate::ExitCodes;

#[derive(Args)]
pub struct ValidateArgs {
    /// Id of the app whose schema to validate against
    id: String,

    /// Configuration values as key=value pairs (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Also probe the app's default host ports for availability
    #[arg(long)]
    check_ports: bool,

    /// Emit the validation result as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(repository_path: &Path, args: ValidateArgs) -> Result<()> {
    let repository = AppRepository::new(repository_path);

    let app = repository
        .get_by_id(&args.id)?
        .ok_or_else(|| anyhow::anyhow!("App not found: {}", args.id))?;

    let config = parse_values(&args.set)?;
    info!(
        "Validating {} value(s) against {}",
        config.len(),
        app.metadata.id
    );

    let result = ConfigValidator::validate_configuration(&app.configuration.fields, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.valid {
        println!("✅ Configuration is valid for {}", app.metadata.name);
    } else {
        println!("❌ Configuration is invalid for {}:", app.metadata.name);
        for error in &result.errors {
            println!("   - {}: {}", error.field, error.message);
        }
    }

    if args.check_ports {
        for port in &app.ports {
            let host_port = port.default_host_port.unwrap_or(port.container_port);
            if is_port_available(host_port).await {
                println!("🔌 Port {} is available", host_port);
            } else {
                println!("⚠️  Port {} is already in use", host_port);
            }
        }
    }

    if !result.valid {
        std::process::exit(i32::from(ExitCodes::VALIDATION_FAILURE));
    }

    Ok(())
}

/// Parse repeated `key=value` flags into a value map.
///
/// Values stay strings; typed fields coerce them the same way form input is
/// coerced (numeric strings, "true"/"false", select option values).
fn parse_values(pairs: &[String]) -> Result<HashMap<String, Value>> {
    let mut config = HashMap::new();

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid value \"{}\", expected KEY=VALUE", pair))?;
        config.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        let pairs = vec!["password=secret".to_string(), "port=8080".to_string()];
        let config = parse_values(&pairs).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(config["password"], Value::String("secret".to_string()));
        assert_eq!(config["port"], Value::String("8080".to_string()));
    }

    #[test]
    fn test_parse_values_keeps_equals_in_value() {
        let pairs = vec!["token=a=b".to_string()];
        let config = parse_values(&pairs).unwrap();
        assert_eq!(config["token"], Value::String("a=b".to_string()));
    }

    #[test]
    fn test_parse_values_rejects_bare_keys() {
        let pairs = vec!["password".to_string()];
        assert!(parse_values(&pairs).is_err());
    }
}
