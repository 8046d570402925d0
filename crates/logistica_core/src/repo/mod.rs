//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the runner depends on.
//! - Isolate SQLite query and document-mapping details from callers.
//!
//! # Invariants
//! - Repository APIs return semantic results (`Option`, empty `Vec`) for
//!   missing data; errors are reserved for store and decoding failures.

pub mod cliente_repo;
