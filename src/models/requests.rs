//! Request DTOs for the resize proxy API
//!
//! Defines the structure of incoming request parameters.

use serde::Deserialize;

/// Query parameters for the resize endpoint (GET /resize)
///
/// # Fields
/// - `url`: Source image URL to fetch
/// - `width`: Target width in pixels
/// - `height`: Target height in pixels
#[derive(Debug, Clone, Deserialize)]
pub struct ResizeParams {
    /// Source image URL
    pub url: String,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
}

impl ResizeParams {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() {
            return Some("invalid resource URL".to_string());
        }
        if self.width == 0 {
            return Some("invalid property width".to_string());
        }
        if self.height == 0 {
            return Some("invalid property height".to_string());
        }
        None
    }
}
