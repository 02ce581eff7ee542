//! API Module
//!
//! HTTP handlers and routing for the item cache REST API.
//!
//! # Endpoints
//! - `GET /item/id/:id` - Retrieve an item by ID
//! - `DELETE /item/id/:id` - Delete an item by ID
//! - `GET /item/name/:name` - Retrieve an item by name
//! - `POST /item` - Cache an item
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
