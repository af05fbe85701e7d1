//! BudgetFlow core
//!
//! The non-visual core of a personal budgeting client: users record
//! recurring income and expense items at differing cadences, view totals
//! normalized to a chosen time scale, and track progress through their pay
//! cycle. State can live on the device (guest mode) or in a per-identity
//! remote document, with a one-way migration when a guest signs in.
//!
//! # Architecture
//!
//! - `config`: settings and path management
//! - `error`: crate error types
//! - `models`: cadence, money, ids, and the budget aggregate
//! - `services`: pure logic (frequency conversion, pay-cycle math, totals)
//! - `state`: the view state and its intent reducer
//! - `storage`: local cache and remote document store backends
//! - `auth`: identity value types and the provider seam
//! - `sync`: the persistence synchronizer binding state to storage
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetflow::state::{reduce, Intent, ViewState};
//! use budgetflow::storage::{LocalCache, MemoryRemoteStore};
//! use budgetflow::sync::Synchronizer;
//!
//! let mut sync = Synchronizer::new(LocalCache::new(path), MemoryRemoteStore::new());
//! let state = sync.hydrate(&ViewState::default(), identity.as_ref()).await;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod sync;

pub use error::{BudgetError, BudgetResult};
