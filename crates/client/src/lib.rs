//! Client code for worldstate-rs.
//!
//! This crate provides the HTTP request layer for the Warframe worldstate
//! API: a conditional-GET client with an in-memory ETag cache, and generic
//! helpers that map response bodies onto caller-supplied types.

pub mod worldstate;

pub use worldstate::{Error, WorldstateClient};

pub use worldstate_core::{CacheEntry, ClientConfig, ConfigError, ResponseCache};
