//! Remote per-identity document store
//!
//! The transport is an external collaborator; this module defines the seam
//! the synchronizer talks through, plus an in-memory implementation used in
//! tests and as a stand-in backend. One logical document per identity,
//! keyed by uid; absence means "no remote budget".

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

/// An opaque async document store holding one budget per identity
///
/// `load` distinguishes failure (`Err`) from absence (`Ok(None)`); the
/// synchronizer collapses the two, but callers that need the distinction
/// have it here.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the budget document for an identity
    async fn load(&self, uid: &str) -> BudgetResult<Option<Budget>>;

    /// Overwrite the budget document for an identity
    async fn save(&self, uid: &str, budget: &Budget) -> BudgetResult<()>;

    /// Delete the budget document for an identity; absent is not an error
    async fn clear(&self, uid: &str) -> BudgetResult<()>;
}

/// In-memory `RemoteStore`
///
/// Documents round-trip through `serde_json::Value`, the same degradation
/// surface a real document store has.
#[derive(Debug, Default)]
pub struct MemoryRemoteStore {
    documents: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether no documents are stored
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Plant a raw document, bypassing serialization (test helper)
    pub async fn insert_raw(&self, uid: &str, document: serde_json::Value) {
        self.documents
            .write()
            .await
            .insert(uid.to_string(), document);
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn load(&self, uid: &str) -> BudgetResult<Option<Budget>> {
        let documents = self.documents.read().await;
        match documents.get(uid) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| BudgetError::Remote(format!("Malformed document for {}: {}", uid, e))),
        }
    }

    async fn save(&self, uid: &str, budget: &Budget) -> BudgetResult<()> {
        let value = serde_json::to_value(budget)
            .map_err(|e| BudgetError::Remote(format!("Failed to serialize budget: {}", e)))?;
        self.documents.write().await.insert(uid.to_string(), value);
        Ok(())
    }

    async fn clear(&self, uid: &str) -> BudgetResult<()> {
        self.documents.write().await.remove(uid);
        Ok(())
    }
}
