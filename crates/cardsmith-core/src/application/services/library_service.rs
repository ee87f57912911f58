//! Library Service - loads, persists, exports and imports the project library.
//!
//! Every mutating use case follows the same shape:
//! 1. Load the blob through the store (migrating old layouts)
//! 2. Apply a domain operation to the [`Library`]
//! 3. Save the blob back
//!
//! A failed domain operation leaves the stored blob untouched.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::KeyValueStore},
    domain::{DomainResult, LIBRARY_KEY, Library},
    error::CardsmithResult,
};

/// Orchestrates library persistence over a [`KeyValueStore`].
pub struct LibraryService {
    store: Box<dyn KeyValueStore>,
}

impl LibraryService {
    /// Create a new library service over the given store.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cardsmith_core::application::{LibraryService, ports::KeyValueStore};
    ///
    /// # fn demo(store: Box<dyn KeyValueStore>) -> cardsmith_core::error::CardsmithResult<()> {
    /// let service = LibraryService::new(store);
    /// let library = service.load()?;
    /// println!("{} projects", library.projects().len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the library, or an empty one if nothing is stored yet.
    ///
    /// Blobs written before snippets existed load with empty snippet maps.
    #[instrument(skip_all, fields(key = LIBRARY_KEY))]
    pub fn load(&self) -> CardsmithResult<Library> {
        let Some(text) = self.store.load(LIBRARY_KEY)? else {
            debug!("No stored library, starting empty");
            return Ok(Library::new());
        };

        let library: Library =
            serde_json::from_str(&text).map_err(|e| ApplicationError::Serialization {
                key: LIBRARY_KEY.into(),
                reason: e.to_string(),
            })?;
        debug!(projects = library.projects().len(), "Library loaded");
        Ok(library)
    }

    /// Persist the whole library under [`LIBRARY_KEY`].
    #[instrument(skip_all, fields(key = LIBRARY_KEY))]
    pub fn save(&self, library: &Library) -> CardsmithResult<()> {
        let text = serde_json::to_string(library).map_err(|e| ApplicationError::Serialization {
            key: LIBRARY_KEY.into(),
            reason: e.to_string(),
        })?;
        self.store.save(LIBRARY_KEY, &text)?;
        debug!(bytes = text.len(), "Library saved");
        Ok(())
    }

    /// Load, apply `op`, and save if `op` succeeded.
    pub fn update<T>(&self, op: impl FnOnce(&mut Library) -> DomainResult<T>) -> CardsmithResult<T> {
        let mut library = self.load()?;
        let out = op(&mut library)?;
        self.save(&library)?;
        Ok(out)
    }

    /// The stored library as pretty-printed JSON.
    #[instrument(skip_all)]
    pub fn export(&self) -> CardsmithResult<String> {
        let library = self.load()?;
        let text = library
            .export_json()
            .map_err(|e| ApplicationError::Serialization {
                key: LIBRARY_KEY.into(),
                reason: e.to_string(),
            })?;
        info!(
            projects = library.projects().len(),
            snippets = library.snippet_count(),
            "Library exported"
        );
        Ok(text)
    }

    /// Replace the stored library with a backup.
    ///
    /// The backup is validated before anything is written.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn import(&self, text: &str) -> CardsmithResult<Library> {
        let library = Library::import_json(text)?;
        self.save(&library)?;
        info!(
            projects = library.projects().len(),
            snippets = library.snippet_count(),
            "Library imported"
        );
        Ok(library)
    }
}
