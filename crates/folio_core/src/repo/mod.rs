//! Content repository layer.
//!
//! # Responsibility
//! - Define the read-only access contract the views depend on.
//! - Build validated in-memory stores from built-in or bundled content.
//!
//! # Invariants
//! - Project ids are unique across one store; violations fail at load time.
//! - Stores never mutate after construction.

pub mod builtin;
pub mod content_repo;
