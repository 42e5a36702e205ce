//! PlotBot HTTP API — library crate for the read-only lookup server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `pb-e2e-tests`) can access `AppState`, `build_router`, and the
//! config/error types.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
