//! notify_admin_client - cached client for the notify remote API.
//!
//! The imperative shell around `notify_admin_core`: HTTP transport, the
//! read-through cache and invalidation guard, and one typed operation per
//! remote endpoint the admin uses.

pub mod cached;
pub mod client;
pub mod error;
pub mod registry;
pub mod transport;

#[cfg(test)]
mod testing;

pub use cached::{Invalidation, InvalidationGuard, ReadThroughCache};
pub use client::{CacheTtls, NotifyClient};
pub use error::{ClientError, Result};
pub use registry::ClientRegistry;
pub use transport::{ApiTransport, HttpTransport};
