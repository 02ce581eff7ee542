//! Request and Response models for the cache server API
//!
//! This module defines the types serialized to and from HTTP bodies.

pub mod item;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
