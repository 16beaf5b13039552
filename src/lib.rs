//! Millennium - a small customer service over HTTP
//!
//! The crate is split into:
//! - An in-memory customer store with store-assigned ids
//! - An axum endpoint layer that validates input and maps store outcomes to HTTP
//! - Layered configuration (file + environment)

pub mod api;
pub mod config;
pub mod error;
pub mod repository;
pub mod types;

pub use error::{Error, Result};
