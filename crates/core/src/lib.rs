//! Domain logic for the Fyyur booking directory.
//!
//! Everything here is free of I/O so the repository layer, the HTTP layer
//! and tests can share it.

pub mod choices;
pub mod directory;
pub mod error;
pub mod genres;
pub mod schedule;
pub mod search;
pub mod types;
pub mod validation;
