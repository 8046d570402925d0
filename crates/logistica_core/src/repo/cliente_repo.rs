//! Cliente repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the store access port consumed by the runner.
//! - Keep SQL and document (de)serialization inside the persistence
//!   boundary.
//!
//! # Invariants
//! - `save` assigns the identifier exactly once; stored ids are never
//!   rewritten.
//! - Lookups are exact, case-sensitive field-equality matches.
//! - Read paths must reject malformed persisted state instead of masking
//!   it.

use crate::db::DbError;
use crate::model::cliente::{Cliente, ClienteId, Pedido};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CLIENTE_SELECT_SQL: &str = "SELECT
    uuid,
    nombre,
    apellidos,
    email,
    pedidos
FROM clientes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for customer persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted cliente data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store access port for customer records.
///
/// The lookup methods replace the originating framework's derived queries
/// with explicit field-equality functions.
pub trait ClienteRepository {
    /// Removes every stored Cliente (and with it every embedded Pedido).
    /// Succeeds on an already-empty store.
    fn delete_all(&self) -> RepoResult<()>;
    /// Inserts the record, assigning a fresh id when none is present, and
    /// returns it with `id` populated.
    fn save(&self, cliente: &Cliente) -> RepoResult<Cliente>;
    /// Returns every stored Cliente in insertion order.
    fn find_all(&self) -> RepoResult<Vec<Cliente>>;
    /// Returns one Cliente by stable id.
    fn find_by_id(&self, id: ClienteId) -> RepoResult<Option<Cliente>>;
    /// Returns all Clientes whose `nombre` equals the argument exactly.
    fn find_by_nombre(&self, nombre: &str) -> RepoResult<Vec<Cliente>>;
    /// Returns all Clientes whose `apellidos` equals the argument exactly.
    fn find_by_apellidos(&self, apellidos: &str) -> RepoResult<Vec<Cliente>>;
    /// Returns the earliest-inserted Cliente with this email, if any.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Cliente>>;
    /// Returns the number of stored Clientes.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed customer repository.
pub struct SqliteClienteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClienteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn select_where(&self, predicate: &str, value: &str) -> RepoResult<Vec<Cliente>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENTE_SELECT_SQL} WHERE {predicate} ORDER BY rowid ASC"))?;

        let mut rows = stmt.query([value])?;
        let mut clientes = Vec::new();
        while let Some(row) = rows.next()? {
            clientes.push(parse_cliente_row(row)?);
        }

        Ok(clientes)
    }
}

impl ClienteRepository for SqliteClienteRepository<'_> {
    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM clientes;", [])?;
        Ok(())
    }

    fn save(&self, cliente: &Cliente) -> RepoResult<Cliente> {
        let mut stored = cliente.clone();
        let id = *stored.id.get_or_insert_with(Uuid::new_v4);
        let pedidos_document = pedidos_to_document(&stored.pedidos)?;

        self.conn.execute(
            "INSERT INTO clientes (uuid, nombre, apellidos, email, pedidos)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                id.to_string(),
                stored.nombre.as_str(),
                stored.apellidos.as_str(),
                stored.email.as_str(),
                pedidos_document,
            ],
        )?;

        Ok(stored)
    }

    fn find_all(&self) -> RepoResult<Vec<Cliente>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENTE_SELECT_SQL} ORDER BY rowid ASC"))?;

        let mut rows = stmt.query([])?;
        let mut clientes = Vec::new();
        while let Some(row) = rows.next()? {
            clientes.push(parse_cliente_row(row)?);
        }

        Ok(clientes)
    }

    fn find_by_id(&self, id: ClienteId) -> RepoResult<Option<Cliente>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENTE_SELECT_SQL} WHERE uuid = ?1"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_cliente_row(row)?));
        }

        Ok(None)
    }

    fn find_by_nombre(&self, nombre: &str) -> RepoResult<Vec<Cliente>> {
        self.select_where("nombre = ?1", nombre)
    }

    fn find_by_apellidos(&self, apellidos: &str) -> RepoResult<Vec<Cliente>> {
        self.select_where("apellidos = ?1", apellidos)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Cliente>> {
        // The store does not enforce email uniqueness; first match in
        // insertion order wins.
        let mut stmt = self.conn.prepare(&format!(
            "{CLIENTE_SELECT_SQL} WHERE email = ?1 ORDER BY rowid ASC LIMIT 1"
        ))?;

        let mut rows = stmt.query([email])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_cliente_row(row)?));
        }

        Ok(None)
    }

    fn count(&self) -> RepoResult<u64> {
        let total = self
            .conn
            .query_row("SELECT COUNT(*) FROM clientes;", [], |row| {
                row.get::<_, u64>(0)
            })?;
        Ok(total)
    }
}

fn pedidos_to_document(pedidos: &[Pedido]) -> RepoResult<String> {
    serde_json::to_string(pedidos).map_err(|err| {
        RepoError::InvalidData(format!("pedidos cannot be serialized: {err}"))
    })
}

fn parse_cliente_row(row: &Row<'_>) -> RepoResult<Cliente> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in clientes.uuid"))
    })?;

    let pedidos_document: String = row.get("pedidos")?;
    let pedidos: Vec<Pedido> = serde_json::from_str(&pedidos_document).map_err(|err| {
        RepoError::InvalidData(format!("malformed document in clientes.pedidos: {err}"))
    })?;

    Ok(Cliente {
        id: Some(id),
        nombre: row.get("nombre")?,
        apellidos: row.get("apellidos")?,
        email: row.get("email")?,
        pedidos,
    })
}
