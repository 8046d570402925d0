//! Domain model for the customer store.
//!
//! # Responsibility
//! - Define the canonical record shapes used by repository and runner.
//!
//! # Invariants
//! - Pedidos are embedded: they share their Cliente's lifecycle and are
//!   never stored or addressed on their own.

pub mod cliente;
