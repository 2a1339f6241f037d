//! Domain core for the roster service.
//!
//! Holds the shared id/timestamp types, the classified error taxonomy, the
//! request validator, the [`store::EntityStore`] port, and the
//! [`command::CommandService`] that orchestrates validated, transactional
//! creation. Nothing in this crate talks to a database directly.

pub mod command;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;
