//! Builder for creating and configuring Studio instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Studio;
use crate::{
    db::Database,
    error::{JoinResultExt, Result, StudioError},
};

/// Builder for creating and configuring Studio instances.
#[derive(Debug, Clone, Default)]
pub struct StudioBuilder {
    database_path: Option<PathBuf>,
}

impl StudioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/studioflow/studioflow.db` or
    /// `~/.local/share/studioflow/studioflow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the studio, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `StudioError::FileSystem` if the database directory cannot be
    /// created, `StudioError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Studio> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StudioError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(|_| ()))
            .await
            .join_context()?;

        log::debug!("Using database at {}", db_path.display());
        Ok(Studio::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studioflow")
            .place_data_file("studioflow.db")
            .map_err(|e| StudioError::XdgDirectory(e.to_string()))
    }
}
