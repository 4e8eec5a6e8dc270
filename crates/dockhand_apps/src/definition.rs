//! App definition data model.
//!
//! This module defines the data-driven template format: each installable
//! application is described by one definition file whose shape mirrors
//! [`AppDefinition`]. Definitions carry metadata for discovery, a container
//! spec, a configuration schema, and declarative volume/port/lifecycle
//! information. They are parsed once at load time and never mutated.

use serde::{Deserialize, Serialize};

/// Identity and discovery attributes of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    /// Globally unique identifier, the repository's only lookup key
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown in listings
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Category used for browse filtering
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub version: String,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl AppMetadata {
    /// Case-insensitive substring match against name, description, or any tag.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// Container restart policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    #[default]
    No,
    Always,
    OnFailure,
    UnlessStopped,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::No => "no",
            RestartPolicy::Always => "always",
            RestartPolicy::OnFailure => "on-failure",
            RestartPolicy::UnlessStopped => "unless-stopped",
        }
    }
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deployment spec for the template's container.
///
/// Carried as data; nothing here is validated at load time beyond presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerConfig {
    /// Image reference, e.g. `redis:7.2`
    pub image: String,
    #[serde(default)]
    pub restart_policy: RestartPolicy,
    #[serde(default)]
    pub network_mode: Option<String>,
    #[serde(default)]
    pub privileged: bool,
    #[serde(default)]
    pub cap_add: Vec<String>,
    #[serde(default)]
    pub cap_drop: Vec<String>,
}

/// Input type of a configuration field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Password,
    Number,
    Boolean,
    Select,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Select => "select",
        }
    }
}

/// Optional per-field constraints.
///
/// String lengths apply to `string`/`password` fields, numeric bounds to
/// `number` fields; both bound pairs are inclusive. `pattern_message`
/// replaces the generated message for min-length and pattern failures.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub pattern_message: Option<String>,
}

/// One choice offered by a `select` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// One configuration input the template accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigField {
    /// Lookup key against submitted values, unique within a schema
    pub key: String,
    /// Human-readable label used in validation messages
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    /// Declared choices, required for `select` fields that are ever validated
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Runtime environment variable the value maps to
    pub env_var: String,
    #[serde(default)]
    pub validation: Option<ValidationRules>,
}

impl ConfigField {
    /// Whether a value must be supplied for this field.
    pub fn is_required(&self) -> bool {
        self.validation.as_ref().map_or(false, |rules| rules.required)
    }
}

/// Ordered set of configuration fields a template declares.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigurationSchema {
    #[serde(default)]
    pub fields: Vec<ConfigField>,
}

/// Declarative mount point required by the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDefinition {
    pub container_path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

/// Transport protocol for an exposed port.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

/// Declarative exposed port with an optional suggested host port.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDefinition {
    pub container_port: u16,
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_host_port: Option<u16>,
}

/// Health probe mechanism.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthCheckType {
    Http,
    Tcp,
    Command,
}

impl HealthCheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCheckType::Http => "http",
            HealthCheckType::Tcp => "tcp",
            HealthCheckType::Command => "command",
        }
    }
}

/// Declarative health check; execution belongs to the deployment layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckConfig {
    #[serde(rename = "type")]
    pub check_type: HealthCheckType,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Seconds between probes
    pub interval: u32,
    /// Seconds before a single probe is abandoned
    pub timeout: u32,
    pub retries: u32,
    #[serde(default)]
    pub start_period: Option<u32>,
}

/// Backup command and the paths it captures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    pub command: String,
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Restore command matching a previous backup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreConfig {
    pub command: String,
}

/// Declarative lifecycle hooks; execution belongs to the deployment layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleConfig {
    #[serde(default)]
    pub pre_install: Vec<String>,
    #[serde(default)]
    pub post_install: Vec<String>,
    #[serde(default)]
    pub pre_uninstall: Vec<String>,
    #[serde(default)]
    pub post_uninstall: Vec<String>,
    #[serde(default)]
    pub backup: Option<BackupConfig>,
    #[serde(default)]
    pub restore: Option<RestoreConfig>,
}

/// The template: immutable description of an installable application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefinition {
    pub metadata: AppMetadata,
    pub docker: DockerConfig,
    pub configuration: ConfigurationSchema,
    #[serde(default)]
    pub volumes: Vec<VolumeDefinition>,
    #[serde(default)]
    pub ports: Vec<PortDefinition>,
    #[serde(default)]
    pub health_check: Option<HealthCheckConfig>,
    #[serde(default)]
    pub lifecycle: Option<LifecycleConfig>,
}

impl AppDefinition {
    /// Get a configuration field by key.
    pub fn field(&self, key: &str) -> Option<&ConfigField> {
        self.configuration.fields.iter().find(|field| field.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_definition() {
        let definition: AppDefinition = serde_json::from_str(
            r#"{
  "metadata": {
    "id": "postgres-db",
    "name": "PostgreSQL",
    "description": "Relational database",
    "category": "Databases",
    "tags": ["postgres", "sql"],
    "version": "16.1"
  },
  "docker": {
    "image": "postgres:16.1",
    "restartPolicy": "unless-stopped",
    "capAdd": ["NET_ADMIN"]
  },
  "configuration": {
    "fields": [
      {
        "key": "password",
        "label": "Password",
        "type": "password",
        "envVar": "POSTGRES_PASSWORD",
        "validation": { "required": true, "minLength": 8 }
      },
      {
        "key": "locale",
        "label": "Locale",
        "type": "select",
        "options": [{ "label": "English", "value": "en_US" }],
        "envVar": "LANG"
      }
    ]
  },
  "volumes": [{ "containerPath": "/var/lib/postgresql/data", "description": "Data", "required": true }],
  "ports": [{ "containerPort": 5432, "protocol": "tcp", "description": "SQL", "defaultHostPort": 5432 }],
  "healthCheck": { "type": "tcp", "port": 5432, "interval": 30, "timeout": 5, "retries": 3 },
  "lifecycle": { "postInstall": ["initdb"], "backup": { "command": "pg_dump", "paths": ["/backup"] } }
}"#,
        )
        .unwrap();

        assert_eq!(definition.metadata.id, "postgres-db");
        assert_eq!(definition.docker.restart_policy, RestartPolicy::UnlessStopped);
        assert_eq!(definition.configuration.fields.len(), 2);
        assert!(definition.field("password").unwrap().is_required());
        assert!(!definition.field("locale").unwrap().is_required());
        assert_eq!(definition.ports[0].default_host_port, Some(5432));
        assert_eq!(definition.health_check.unwrap().check_type, HealthCheckType::Tcp);
    }

    #[test]
    fn test_restart_policy_wire_format() {
        let policy: RestartPolicy = serde_json::from_str(r#""on-failure""#).unwrap();
        assert_eq!(policy, RestartPolicy::OnFailure);
        assert_eq!(serde_json::to_string(&policy).unwrap(), r#""on-failure""#);
    }

    #[test]
    fn test_metadata_matches_query() {
        let metadata: AppMetadata = serde_json::from_str(
            r#"{
  "id": "cache",
  "name": "Cache Server",
  "description": "In-memory store",
  "category": "Databases",
  "tags": ["redis"],
  "version": "1.0.0"
}"#,
        )
        .unwrap();

        assert!(metadata.matches("cache"));
        assert!(metadata.matches("MEMORY"));
        assert!(metadata.matches("redis"));
        assert!(!metadata.matches("postgres"));
    }
}
