//! Cliente domain model.
//!
//! # Responsibility
//! - Define the customer record and its embedded order sub-records.
//! - Keep the document shape: pedidos live inside their Cliente.
//!
//! # Invariants
//! - `id` is `None` until the repository assigns one on first save.
//! - `pedidos` is always materialized; an empty list is the default.
//! - A `Pedido` has no identity or lifecycle outside its owning `Cliente`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned by the store on first insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ClienteId = Uuid;

/// Order line embedded inside a customer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    /// Free-text product description.
    pub producto: String,
    /// Monetary amount. No currency or sign constraint is enforced.
    pub precio: f64,
}

impl Pedido {
    pub fn new(producto: impl Into<String>, precio: f64) -> Self {
        Self {
            producto: producto.into(),
            precio,
        }
    }
}

impl Display for Pedido {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pedido{{producto='{}', precio={}}}",
            self.producto, self.precio
        )
    }
}

/// Customer record owning an embedded list of pedidos.
///
/// Deleting a Cliente removes its pedidos with it; no pedido is ever
/// referenced from outside its owning record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    /// Assigned by the repository on first save; immutable afterwards.
    pub id: Option<ClienteId>,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    /// Embedded sub-documents, kept in insertion order.
    #[serde(default)]
    pub pedidos: Vec<Pedido>,
}

impl Cliente {
    /// Creates an unsaved Cliente with no pedidos.
    pub fn new(
        nombre: impl Into<String>,
        apellidos: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::with_pedidos(nombre, apellidos, email, Vec::new())
    }

    /// Creates an unsaved Cliente with pedidos supplied up front.
    pub fn with_pedidos(
        nombre: impl Into<String>,
        apellidos: impl Into<String>,
        email: impl Into<String>,
        pedidos: Vec<Pedido>,
    ) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            apellidos: apellidos.into(),
            email: email.into(),
            pedidos,
        }
    }

    /// Appends one pedido to the embedded list.
    pub fn add_pedido(&mut self, pedido: Pedido) {
        self.pedidos.push(pedido);
    }

    /// Identifier as display text; `null` while unsaved.
    pub fn id_text(&self) -> String {
        self.id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "null".to_string())
    }
}

impl Display for Cliente {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cliente{{id='{}', nombre='{}', apellidos='{}', email='{}', pedidos=[",
            self.id_text(),
            self.nombre,
            self.apellidos,
            self.email
        )?;
        for (index, pedido) in self.pedidos.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pedido}")?;
        }
        write!(f, "]}}")
    }
}
