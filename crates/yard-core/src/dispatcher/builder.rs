//! Builder for creating and configuring Dispatcher instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Dispatcher;
use crate::{
    access::{AccessGate, PinGate},
    error::{DispatchError, Result},
    store::{Database, DEFAULT_STORAGE_KEY},
};

/// Builder for creating and configuring Dispatcher instances.
pub struct DispatcherBuilder {
    database_path: Option<PathBuf>,
    storage_key: String,
    gate: Option<Box<dyn AccessGate>>,
}

impl DispatcherBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            gate: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/yard/yard.db` or `~/.local/share/yard/yard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the key the stop collection is stored under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the access gate. Defaults to a locked [`PinGate`] with the
    /// built-in PIN.
    pub fn with_gate(mut self, gate: impl AccessGate + 'static) -> Self {
        self.gate = Some(Box::new(gate));
        self
    }

    /// Builds the configured dispatcher instance.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::XdgDirectory` if no default path can be found
    /// Returns `DispatchError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `DispatchError::Database` if database initialization fails
    pub fn build(self) -> Result<Dispatcher> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DispatchError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening dispatch database at {}", db_path.display());
        let database = Database::with_key(&db_path, self.storage_key)?;
        let gate = self
            .gate
            .unwrap_or_else(|| Box::new(PinGate::default()));

        Ok(Dispatcher {
            store: Box::new(database),
            gate,
        })
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("yard")
            .place_data_file("yard.db")
            .map_err(|e| DispatchError::XdgDirectory(e.to_string()))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
