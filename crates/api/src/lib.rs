//! Fyyur API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! forms) so integration tests and the binary entrypoint can both reach them.

pub mod config;
pub mod error;
pub mod extract;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
