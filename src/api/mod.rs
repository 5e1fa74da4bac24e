//! API Module
//!
//! HTTP handlers and routing for the resize proxy REST API.
//!
//! # Endpoints
//! - `GET /resize?url=&width=&height=` - Fetch, resize, and stream an image
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
