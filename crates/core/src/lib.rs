//! notify_admin_core - functional core of the notify admin.
//!
//! Pure types and functions only: cache key construction, glob matching,
//! cache serialization, the remote error taxonomy and the folder tree
//! builder. Anything that performs I/O lives in `notify_admin_client`.

pub mod cache;
pub mod folders;
pub mod models;
pub mod remote;
pub mod serde;
