//! Cache wrappers around remote API calls.
//!
//! Reads go through [`ReadThroughCache`]; mutations go through
//! [`InvalidationGuard`]. Both degrade to "no cache" when the store is
//! unreachable: the remote API stays the source of truth.

mod invalidation;
mod read_through;

pub use invalidation::{Invalidation, InvalidationGuard};
pub use read_through::ReadThroughCache;
