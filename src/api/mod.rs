//! API Module
//!
//! Loopback-only admin API in front of the prefix cache.
//!
//! # Endpoints
//! - `PUT /entries` - Store a key-value pair
//! - `GET /entries?key=K` - Retrieve a value by key
//! - `DELETE /entries?key=K` - Delete a key
//! - `GET /keys?prefix=P` - List keys under a prefix
//! - `POST /clear` - Remove every entry under a prefix or directory
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod access;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
