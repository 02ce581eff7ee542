//! Item Cache - A bounded in-memory item cache server
//!
//! Caches items by name in a fixed-capacity LRU cache and serves them over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
