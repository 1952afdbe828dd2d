//! Core types and shared functionality for worldstate-rs.
//!
//! This crate provides:
//! - In-memory response cache keyed by URL (ETag revalidation)
//! - Configuration structures
//! - Server timestamp parsing

pub mod cache;
pub mod config;
pub mod time;

pub use cache::{CacheEntry, ResponseCache};
pub use config::{ClientConfig, ConfigError};
pub use time::parse_server_time;
