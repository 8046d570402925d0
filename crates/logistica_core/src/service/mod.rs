//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the runner decoupled from storage details.

pub mod cliente_service;
