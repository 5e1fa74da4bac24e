//! Resize Proxy - a caching image resize proxy server
//!
//! Fetches a source image, resizes it, and streams the JPEG result while
//! capturing it into a bounded TTL cache so repeated requests skip the work.

pub mod api;
pub mod cache;
pub mod capture;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod tasks;
pub mod transform;

pub use api::AppState;
pub use config::Config;
pub use tasks::{spawn_sweep_task, SweepTask};
