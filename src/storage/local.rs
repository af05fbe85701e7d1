//! Local device cache
//!
//! One JSON document at a fixed path, holding the guest-mode budget.
//! Absence means "no local budget"; a document that can't be parsed is
//! treated the same way, so stale or corrupt data never blocks startup.

use std::path::PathBuf;

use tracing::warn;

use crate::config::paths::BudgetFlowPaths;
use crate::error::BudgetResult;
use crate::models::Budget;

use super::file_io::{read_json_opt, write_json_atomic};

/// The single-document budget cache on this device
#[derive(Debug, Clone)]
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    /// Create a cache backed by an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a cache at the standard location for this platform
    pub fn from_paths(paths: &BudgetFlowPaths) -> Self {
        Self::new(paths.cache_file())
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the cached budget, if any
    ///
    /// Malformed data degrades silently to `None`.
    pub fn load(&self) -> Option<Budget> {
        match read_json_opt(&self.path) {
            Ok(budget) => budget,
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "discarding unreadable local cache");
                None
            }
        }
    }

    /// Overwrite the cached budget
    pub fn save(&self, budget: &Budget) -> BudgetResult<()> {
        write_json_atomic(&self.path, budget)
    }

    /// Remove the cached budget; absent is not an error
    pub fn clear(&self) -> BudgetResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Whether a cached document exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
