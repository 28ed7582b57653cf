//! Configuration
//!
//! Runtime settings live in a TOML file (see `tabula.toml`), parsed on the
//! device by a small hand-written parser into [`Config`].

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ConfigError};
pub use types::*;
