//! Cliente use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the runner.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Service layer remains storage-agnostic.

use crate::model::cliente::{Cliente, ClienteId};
use crate::repo::cliente_repo::{ClienteRepository, RepoResult};

/// Use-case service wrapper over a customer repository.
pub struct ClienteService<R: ClienteRepository> {
    repo: R,
}

impl<R: ClienteRepository> ClienteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Clears the whole customer collection.
    pub fn delete_all(&self) -> RepoResult<()> {
        self.repo.delete_all()
    }

    /// Persists one customer, returning it with its id assigned.
    pub fn save(&self, cliente: &Cliente) -> RepoResult<Cliente> {
        self.repo.save(cliente)
    }

    /// Returns every stored customer.
    pub fn find_all(&self) -> RepoResult<Vec<Cliente>> {
        self.repo.find_all()
    }

    /// Returns one customer by stable id.
    pub fn find_by_id(&self, id: ClienteId) -> RepoResult<Option<Cliente>> {
        self.repo.find_by_id(id)
    }

    /// Exact-match lookup over `nombre`.
    pub fn find_by_nombre(&self, nombre: &str) -> RepoResult<Vec<Cliente>> {
        self.repo.find_by_nombre(nombre)
    }

    /// Exact-match lookup over `apellidos`.
    pub fn find_by_apellidos(&self, apellidos: &str) -> RepoResult<Vec<Cliente>> {
        self.repo.find_by_apellidos(apellidos)
    }

    /// Exact-match lookup over `email`; `None` when nothing matches.
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<Cliente>> {
        self.repo.find_by_email(email)
    }

    /// Number of stored customers.
    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count()
    }
}
