//! # Cinerow Server
//!
//! The mock API behind the Cinerow front end.
//!
//! ## Overview
//!
//! Two endpoints, one in-memory catalog:
//!
//! - **Search**: case-insensitive substring match over movie titles, with
//!   an artificial fixed latency so client loading states are exercised
//! - **Carousels**: the declarative carousel definitions the home page
//!   renders its content rows from
//!
//! The server is built on Axum and holds everything in memory; nothing is
//! persisted and nothing fails once it is up.

pub mod catalog;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
