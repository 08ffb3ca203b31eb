#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! GDPTrend Record Store Gateway
//!
//! Issues create/update/delete/query operations against a GDP record
//! collection and enforces the one-record-per-year invariant at create
//! time. Two backends:
//!
//! - [`HttpStore`]: reqwest client for an external document-collection
//!   REST API
//! - [`MemoryStore`]: in-process map for tests and local development
//!
//! Store clients are explicitly constructed and injected; there is no
//! process-wide store handle.

pub mod http;
pub mod memory;
pub mod traits;

// Re-export core error types; store operations share the core taxonomy.
pub use gdptrend_core::{Error, Result};

pub use http::{HttpStore, StoreConfig};
pub use memory::MemoryStore;
pub use traits::RecordStore;
