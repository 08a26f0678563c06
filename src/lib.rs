//! Prefix Cache - An in-memory cache with prefix-scoped invalidation
//!
//! The [`cache`] module is the core: an insertion-ordered key/value store
//! whose `clear_prefix` removes every key under a literal prefix as a
//! single snapshot. The [`api`] module is a loopback-only admin surface
//! that drives it over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::PrefixCache;
pub use config::Config;
pub use error::{CacheError, Result};
