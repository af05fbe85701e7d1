//! Storage backends for BudgetFlow
//!
//! Two backends hold the same serialized budget shape: a synchronous local
//! device cache (guest mode) and an async remote document store keyed by
//! identity. The synchronizer decides which one is authoritative.

pub mod file_io;
pub mod local;
pub mod remote;

pub use file_io::{read_json_opt, write_json_atomic};
pub use local::LocalCache;
pub use remote::{MemoryRemoteStore, RemoteStore};
