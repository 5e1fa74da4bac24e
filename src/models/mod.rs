//! Request and Response models for the resize proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing request parameters and serializing JSON response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ResizeParams;
pub use responses::{HealthResponse, StatsResponse};
