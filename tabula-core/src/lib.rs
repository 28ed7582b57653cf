//! Board-agnostic core logic for the Tabula markdown table display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or network implementations:
//!
//! - Collaborator traits (display, link, HTTP, fetch)
//! - Markdown table extraction
//! - Fixed-grid layout with truncation
//! - Renderer issuing draw calls to a display
//! - Fetch/parse/render polling state machine
//! - GitHub contents API resolution and link bring-up
//! - Configuration types and TOML parsing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod layout;
pub mod net;
pub mod poll;
pub mod render;
pub mod table;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export key types
pub use config::{parse_config, Config, ConfigError};
pub use layout::{layout, ColumnLayout, Grid, GridGeometry, PlacedCell};
pub use net::{connect, GithubSource};
pub use poll::{ErrorKind, Event, Failure, Phase, PollLoop, PollState};
pub use render::{RenderError, Renderer};
pub use table::{parse_table, Table};
pub use traits::{
    ConnectError, Display, DisplayError, Fetch, FetchError, HttpClient, HttpError, Link, LinkStatus,
};
