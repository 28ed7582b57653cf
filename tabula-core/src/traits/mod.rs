//! Collaborator traits
//!
//! These traits define the interface between the polling logic and the
//! hardware- or network-specific implementations it drives.

pub mod display;
pub mod fetch;
pub mod link;

pub use display::{Display, DisplayError};
pub use fetch::{Fetch, FetchError, HttpClient, HttpError};
pub use link::{ConnectError, Link, LinkStatus};
