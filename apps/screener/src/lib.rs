//! Results panel for an AI resume screener.
//!
//! The core is pure text processing over an agent's answer (`answer`) and a
//! derived view-state machine (`results`). The remaining modules host that
//! core behind a small axum API.

pub mod answer;
pub mod config;
pub mod errors;
pub mod header;
pub mod models;
pub mod results;
pub mod routes;
pub mod search_client;
pub mod state;
