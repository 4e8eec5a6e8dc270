//! Definition file loading.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::definition::AppDefinition;
use crate::error::{AppError, AppResult};

/// Loads app definitions from a directory of JSON/YAML files.
///
/// The filename does not need to match the definition's id; each usable file
/// contributes one definition keyed by `metadata.id`.
pub struct DefinitionLoader {
    repository_path: PathBuf,
}

impl DefinitionLoader {
    /// Create a new loader for the given definition directory.
    pub fn new(repository_path: impl Into<PathBuf>) -> Self {
        Self {
            repository_path: repository_path.into(),
        }
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    /// Load every usable definition in the directory, keyed by id.
    ///
    /// A definition that fails to parse or fails structural validation is
    /// warned about and skipped. Failing to enumerate the directory itself is
    /// the only fatal outcome.
    pub fn load_all(&self) -> AppResult<HashMap<String, AppDefinition>> {
        let mut definitions = HashMap::new();

        for entry in WalkDir::new(&self.repository_path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AppError::RepositoryUnavailable {
                path: self.repository_path.clone(),
                message: e.to_string(),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_definition_file(path) {
                continue;
            }

            match self.load_definition(path) {
                Ok(definition) => {
                    let id = definition.metadata.id.clone();
                    if definitions.insert(id.clone(), definition).is_some() {
                        debug!("Definition {} replaced by {:?}", id, path);
                    }
                }
                Err(e) => {
                    warn!("Skipping definition {:?}: {}", path, e);
                }
            }
        }

        Ok(definitions)
    }

    /// Load and structurally validate a single definition file.
    pub fn load_definition(&self, path: &Path) -> AppResult<AppDefinition> {
        debug!("Loading definition from {:?}", path);
        let content = fs::read_to_string(path)?;

        let definition: AppDefinition = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        check_structure(path, &definition)?;
        Ok(definition)
    }
}

fn is_definition_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

// Presence of metadata/docker/configuration is enforced by the typed parse;
// only the id and name can still be structurally unusable.
fn check_structure(path: &Path, definition: &AppDefinition) -> AppResult<()> {
    if definition.metadata.id.trim().is_empty() {
        return Err(AppError::MalformedDefinition {
            file: path.to_path_buf(),
            message: "metadata.id must be a non-empty string".to_string(),
        });
    }

    if definition.metadata.name.trim().is_empty() {
        return Err(AppError::MalformedDefinition {
            file: path.to_path_buf(),
            message: "metadata.name must be a non-empty string".to_string(),
        });
    }

    Ok(())
}
