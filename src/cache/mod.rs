//! Cache Module
//!
//! Provides an in-memory, insertion-ordered cache with prefix-scoped
//! invalidation.

mod entry;
mod order;
mod prefix;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub(crate) use order::InsertionOrder;
pub use prefix::directory_prefix;
pub use stats::CacheStats;
pub(crate) use stats::StatsCounters;
pub use store::PrefixCache;
