mod error;
mod status;

pub use error::{RemoteError, RemoteErrorKind};
