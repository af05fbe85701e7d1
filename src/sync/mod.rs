//! Persistence synchronizer
//!
//! Binds the view state's lifecycle to exactly one backend based on the
//! current identity: the remote document store when signed in, the local
//! device cache otherwise. Identity is always an explicit parameter; the
//! synchronizer holds no ambient session state beyond the last settled uid
//! used to guard redundant hydrations.

use tracing::{debug, warn};

use crate::auth::Identity;
use crate::error::BudgetResult;
use crate::state::{reduce, Intent, ViewState};
use crate::storage::{LocalCache, RemoteStore};

/// Keeps the in-memory budget and the authoritative backend in step
pub struct Synchronizer<R: RemoteStore> {
    local: LocalCache,
    remote: R,
    last_uid: Option<String>,
}

impl<R: RemoteStore> Synchronizer<R> {
    pub fn new(local: LocalCache, remote: R) -> Self {
        Self {
            local,
            remote,
            last_uid: None,
        }
    }

    /// The local cache backend
    pub fn local(&self) -> &LocalCache {
        &self.local
    }

    /// The remote store backend
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Resolve the source of truth for `identity` and hydrate the state
    ///
    /// Signed in: any local-cache budget is first migrated one-way to the
    /// identity's remote document (overwriting it, never merging), then the
    /// remote document is fetched. Guest: the local cache is read directly.
    /// A present budget is loaded and the view scale reset to its pay
    /// cadence; an absent one resets the state. Hydration is marked complete
    /// in both cases.
    ///
    /// Re-entry with the same identity while already hydrated returns the
    /// state unchanged, guarding redundant fetches.
    pub async fn hydrate(&mut self, state: &ViewState, identity: Option<&Identity>) -> ViewState {
        let uid = identity.map(|i| i.uid.clone());

        if uid == self.last_uid && state.hydrated {
            debug!(uid = ?uid, "already hydrated for this identity");
            return state.clone();
        }
        self.last_uid = uid.clone();

        let fetched = match uid.as_deref() {
            Some(uid) => {
                self.migrate_local_to_remote(uid).await;
                match self.remote.load(uid).await {
                    Ok(budget) => budget,
                    Err(err) => {
                        // Indistinguishable from an absent document at this layer
                        warn!(error = %err, uid, "remote fetch failed; hydrating empty");
                        None
                    }
                }
            }
            None => self.local.load(),
        };

        let next = match fetched {
            Some(budget) => {
                debug!(uid = ?uid, budget_id = %budget.id, "hydrating budget");
                let scale = budget.pay_cadence;
                let loaded = reduce(state, Intent::Load(budget));
                reduce(&loaded, Intent::SetViewScale(scale))
            }
            None => {
                debug!(uid = ?uid, "no budget found; resetting");
                reduce(state, Intent::Reset)
            }
        };

        reduce(&next, Intent::MarkHydrated)
    }

    /// Write the current budget to whichever backend matches `identity`
    ///
    /// A no-op until hydration has completed or while no budget exists.
    /// The write is awaited to completion; failures propagate, no retry.
    pub async fn persist(
        &self,
        state: &ViewState,
        identity: Option<&Identity>,
    ) -> BudgetResult<()> {
        if !state.hydrated {
            return Ok(());
        }
        let Some(budget) = &state.budget else {
            return Ok(());
        };

        match identity {
            Some(identity) => {
                debug!(uid = %identity.uid, budget_id = %budget.id, "persisting to remote");
                self.remote.save(&identity.uid, budget).await
            }
            None => {
                debug!(budget_id = %budget.id, "persisting to local cache");
                self.local.save(budget)
            }
        }
    }

    /// Reduce an intent, persisting the result when the budget changed
    ///
    /// The persistence write settles before this returns, so writes are
    /// issued in the order their triggering state changes occurred.
    pub async fn dispatch(
        &self,
        state: &ViewState,
        intent: Intent,
        identity: Option<&Identity>,
    ) -> BudgetResult<ViewState> {
        let next = reduce(state, intent);
        if next.hydrated && next.budget.is_some() && next.budget != state.budget {
            self.persist(&next, identity).await?;
        }
        Ok(next)
    }

    /// One-way migration: local budget overwrites the remote document
    ///
    /// The cache is cleared only after the remote write succeeds, so a
    /// failed migration never loses the local budget.
    async fn migrate_local_to_remote(&self, uid: &str) {
        let Some(local_budget) = self.local.load() else {
            return;
        };

        match self.remote.save(uid, &local_budget).await {
            Ok(()) => {
                debug!(uid, budget_id = %local_budget.id, "migrated local budget to remote");
                if let Err(err) = self.local.clear() {
                    warn!(error = %err, "failed to clear local cache after migration");
                }
            }
            Err(err) => {
                warn!(error = %err, uid, "migration write failed; keeping local cache");
            }
        }
    }
}

/// A synchronizer over the in-memory remote store
pub type MemorySynchronizer = Synchronizer<crate::storage::MemoryRemoteStore>;
