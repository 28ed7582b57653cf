//! Simple TOML parser for the device configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! Tabula configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - [section] headers
//! - Key = value pairs (string, integer)
//! - Comments (# ...), including after values
//!
//! NOT supported:
//! - Escape sequences and multi-line strings
//! - Arrays and inline tables
//! - Dotted keys and sub-tables

use core::fmt;
use core::str::FromStr;

use heapless::String;

use super::types::{Config, MAX_TOKEN_LEN};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Key outside of any section
    UnknownKey,
    /// String does not fit its field
    TooLong,
    /// Required field not set
    MissingField,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSection => f.write_str("invalid section"),
            ConfigError::InvalidValue => f.write_str("invalid value"),
            ConfigError::UnknownKey => f.write_str("unknown key"),
            ConfigError::TooLong => f.write_str("value too long"),
            ConfigError::MissingField => f.write_str("missing required field"),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Wifi,
    Source,
    Display,
    Poll,
}

/// Parse TOML configuration into Config
///
/// Missing keys keep their defaults. Call [`Config::validate`] afterwards
/// to check that the required fields are present.
pub fn parse_config(input: &str) -> Result<Config, ConfigError> {
    let mut config = Config::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        match parse_key_value(line) {
            Some((key, value)) => apply_value(section, key, value, &mut config)?,
            None => warn!("Skipping config line without value"),
        }
    }

    Ok(config)
}

/// Parse section header like "wifi"
fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "wifi" => Ok(Section::Wifi),
        "source" => Ok(Section::Source),
        "display" => Ok(Section::Display),
        "poll" => Ok(Section::Poll),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Cut a line at the first `#` outside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse a string value into a bounded field
fn parse_bounded<const N: usize>(value: &str) -> Result<String<N>, ConfigError> {
    String::try_from(parse_string(value)).map_err(|_| ConfigError::TooLong)
}

/// Parse an integer value
fn parse_int<T: FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut Config,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => return Err(ConfigError::UnknownKey),
        Section::Wifi => match key {
            "ssid" => config.wifi.ssid = parse_bounded(value)?,
            "password" => config.wifi.password = parse_bounded(value)?,
            _ => ignore_key(key),
        },
        Section::Source => match key {
            "location" => config.source.location = parse_bounded(value)?,
            "token" => {
                let token: String<MAX_TOKEN_LEN> = parse_bounded(value)?;
                config.source.token = (!token.is_empty()).then_some(token);
            }
            _ => ignore_key(key),
        },
        Section::Display => {
            let d = &mut config.display;
            match key {
                "glyph_width" => d.glyph_width = parse_int(value)?,
                "row_pitch" => d.row_pitch = parse_int(value)?,
                "header_row_height" => d.header_row_height = parse_int(value)?,
                _ => ignore_key(key),
            }
        }
        Section::Poll => match key {
            "poll_interval_s" => config.poll.poll_interval_s = parse_int(value)?,
            "retry_interval_s" => config.poll.retry_interval_s = parse_int(value)?,
            _ => ignore_key(key),
        },
    }

    Ok(())
}

fn ignore_key(key: &str) {
    warn!("Ignoring unknown config key {}", key);
}
