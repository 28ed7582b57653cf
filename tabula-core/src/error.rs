//! Error types in one place
//!
//! Each module defines the errors it produces; this module gathers them
//! for callers that handle several at once.

pub use crate::config::ConfigError;
pub use crate::poll::{ErrorKind, Failure};
pub use crate::render::RenderError;
pub use crate::traits::{ConnectError, DisplayError, FetchError, HttpError};
