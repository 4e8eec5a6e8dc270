//! Concurrent in-memory index of app definitions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::info;

use crate::definition::AppDefinition;
use crate::error::AppResult;
use crate::loader::DefinitionLoader;

/// Default definition directory, relative to the working directory.
pub const DEFAULT_REPOSITORY_PATH: &str = "apps/repository";

/// The authoritative in-memory index of all known templates, keyed by id.
///
/// Reads are concurrent and lock-free after the first load. A load or reload
/// parses every definition into a fresh map outside the index lock, then
/// swaps it in under a short write lock, so readers see either the old
/// complete index or the new one and are never blocked on file I/O.
pub struct AppRepository {
    loader: DefinitionLoader,
    index: RwLock<HashMap<String, Arc<AppDefinition>>>,
    loaded: AtomicBool,
    load_lock: Mutex<()>,
}

impl AppRepository {
    /// Create a repository over the given definition directory.
    ///
    /// Nothing is read until the first access or an explicit
    /// [`ensure_loaded`](Self::ensure_loaded) call.
    pub fn new(repository_path: impl Into<PathBuf>) -> Self {
        Self {
            loader: DefinitionLoader::new(repository_path),
            index: RwLock::new(HashMap::new()),
            loaded: AtomicBool::new(false),
            load_lock: Mutex::new(()),
        }
    }

    pub fn repository_path(&self) -> &Path {
        self.loader.repository_path()
    }

    /// Load the index if it has never been populated.
    ///
    /// Concurrent first calls are serialized; exactly one performs the load.
    pub fn ensure_loaded(&self) -> AppResult<()> {
        if self.loaded.load(Ordering::Acquire) {
            return Ok(());
        }

        let _guard = self.load_lock.lock();
        if self.loaded.load(Ordering::Acquire) {
            return Ok(());
        }

        self.populate()?;
        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    /// Discard the index and load every definition again.
    ///
    /// This is the only update path; reloads are serialized against each
    /// other and against the lazy first load.
    pub fn reload(&self) -> AppResult<()> {
        let _guard = self.load_lock.lock();
        self.populate()?;
        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    fn populate(&self) -> AppResult<()> {
        let fresh: HashMap<String, Arc<AppDefinition>> = self
            .loader
            .load_all()?
            .into_iter()
            .map(|(id, definition)| (id, Arc::new(definition)))
            .collect();

        info!(
            "Loaded {} app definition(s) from {:?}",
            fresh.len(),
            self.repository_path()
        );
        *self.index.write() = fresh;
        Ok(())
    }

    /// Snapshot of all indexed templates.
    pub fn get_all(&self) -> AppResult<Vec<Arc<AppDefinition>>> {
        self.ensure_loaded()?;
        Ok(self.index.read().values().cloned().collect())
    }

    /// Look up a template by id; an unknown id is `None`, not an error.
    pub fn get_by_id(&self, id: &str) -> AppResult<Option<Arc<AppDefinition>>> {
        self.ensure_loaded()?;
        Ok(self.index.read().get(id).cloned())
    }

    /// Case-insensitive exact match against `metadata.category`.
    pub fn get_by_category(&self, category: &str) -> AppResult<Vec<Arc<AppDefinition>>> {
        self.ensure_loaded()?;
        let category = category.to_lowercase();
        Ok(self
            .index
            .read()
            .values()
            .filter(|app| app.metadata.category.to_lowercase() == category)
            .cloned()
            .collect())
    }

    /// Case-insensitive substring search over name, description, and tags.
    pub fn search(&self, query: &str) -> AppResult<Vec<Arc<AppDefinition>>> {
        self.ensure_loaded()?;
        Ok(self
            .index
            .read()
            .values()
            .filter(|app| app.metadata.matches(query))
            .cloned()
            .collect())
    }

    /// Sorted, de-duplicated list of all known categories.
    pub fn categories(&self) -> AppResult<Vec<String>> {
        self.ensure_loaded()?;
        let mut categories: Vec<String> = self
            .index
            .read()
            .values()
            .map(|app| app.metadata.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
