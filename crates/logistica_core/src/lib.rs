//! Core domain logic for the clientes demo store.
//! This crate owns the data model, the store access port and its SQLite
//! implementation; the runner binary only wires and drives them.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::cliente::{Cliente, ClienteId, Pedido};
pub use repo::cliente_repo::{
    ClienteRepository, RepoError, RepoResult, SqliteClienteRepository,
};
pub use service::cliente_service::ClienteService;
