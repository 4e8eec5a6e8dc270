//! # dockhand_apps
//!
//! App template catalog for Dockhand.
//!
//! This crate owns the template data model, the definition-file loader, and
//! the concurrent in-memory repository that every other component reads
//! from. Definitions are plain JSON or YAML files, one per template:
//!
//! - Discovery metadata (id, name, category, tags)
//! - Container spec (image, restart policy, capabilities)
//! - Configuration schema (typed fields with validation rules)
//! - Declarative volumes, ports, health check, and lifecycle hooks
//!
//! ## Example
//!
//! ```rust,no_run
//! use dockhand_apps::AppRepository;
//!
//! let repository = AppRepository::new("apps/repository");
//!
//! for app in repository.get_all().unwrap() {
//!     println!("{} ({})", app.metadata.name, app.metadata.id);
//! }
//!
//! let matches = repository.search("redis").unwrap();
//! ```

pub mod definition;
pub mod error;
pub mod loader;
pub mod repository;

pub use definition::{
    AppDefinition, AppMetadata, BackupConfig, ConfigField, ConfigurationSchema, DockerConfig,
    FieldType, HealthCheckConfig, HealthCheckType, LifecycleConfig, PortDefinition, Protocol,
    RestartPolicy, RestoreConfig, SelectOption, ValidationRules, VolumeDefinition,
};
pub use error::{AppError, AppResult};
pub use loader::DefinitionLoader;
pub use repository::{AppRepository, DEFAULT_REPOSITORY_PATH};
