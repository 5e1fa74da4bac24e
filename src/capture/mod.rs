//! Capture Module
//!
//! Bounded single-pass capture of streamed output: a byte-capped buffer
//! plus the tee writer that feeds it alongside the response sink.

mod buffer;
mod tee;

// Re-export public types
pub use buffer::CaptureBuffer;
pub use tee::TeeWriter;
