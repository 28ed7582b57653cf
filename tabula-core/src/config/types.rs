//! Configuration type definitions

use heapless::String;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use super::toml::ConfigError;

/// Maximum SSID length (802.11 limit)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum source location length (`owner/repo/path`)
pub const MAX_LOCATION_LEN: usize = 128;

/// Maximum access token length
pub const MAX_TOKEN_LEN: usize = 96;

/// Network credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WifiConfig {
    /// Network name
    pub ssid: String<MAX_SSID_LEN>,
    /// Passphrase (empty for open networks)
    pub password: String<MAX_PASSWORD_LEN>,
}

/// Document source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SourceConfig {
    /// Document location, `owner/repo/path/to/file.md`
    pub location: String<MAX_LOCATION_LEN>,
    /// Access token for private repositories
    pub token: Option<String<MAX_TOKEN_LEN>>,
}

impl SourceConfig {
    /// Token to send, if any
    pub fn credentials(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Text metrics used to lay out the table
///
/// The panel size itself comes from the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Horizontal advance of one character in pixels
    pub glyph_width: u16,
    /// Vertical distance between data rows in pixels
    pub row_pitch: u16,
    /// Y position of the first data row in pixels
    pub header_row_height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            glyph_width: 5,
            row_pitch: 8,
            header_row_height: 10,
        }
    }
}

/// Poll timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PollConfig {
    /// Pause between successful updates (seconds)
    pub poll_interval_s: u32,
    /// Pause after a failed update (seconds)
    pub retry_interval_s: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_interval_s: 300,
            retry_interval_s: 60,
        }
    }
}

impl PollConfig {
    /// Poll interval in milliseconds
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_s.saturating_mul(1000)
    }

    /// Retry interval in milliseconds
    pub fn retry_interval_ms(&self) -> u32 {
        self.retry_interval_s.saturating_mul(1000)
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Config {
    pub wifi: WifiConfig,
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub poll: PollConfig,
}

impl Config {
    /// Create a configuration with default settings and no credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that required fields are set and values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wifi.ssid.is_empty() || self.source.location.is_empty() {
            return Err(ConfigError::MissingField);
        }

        if self.source.location.split('/').filter(|s| !s.is_empty()).count() < 3 {
            return Err(ConfigError::InvalidValue);
        }

        let d = &self.display;
        if d.glyph_width == 0 || d.row_pitch == 0 {
            return Err(ConfigError::InvalidValue);
        }

        if self.poll.poll_interval_s == 0 || self.poll.retry_interval_s == 0 {
            return Err(ConfigError::InvalidValue);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        let mut config = Config::new();
        config.wifi.ssid = String::try_from("office").unwrap();
        config.source.location = String::try_from("acme/status/README.md").unwrap();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.poll.poll_interval_ms(), 300_000);
        assert_eq!(config.poll.retry_interval_ms(), 60_000);
        assert_eq!(config.display.row_pitch, 8);
        assert_eq!(config.display.header_row_height, 10);
        assert!(config.source.token.is_none());
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());
        assert_eq!(Config::new().validate(), Err(ConfigError::MissingField));

        let mut config = valid();
        config.source.location = String::try_from("acme/status").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidValue));

        let mut config = valid();
        config.display.row_pitch = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidValue));

        let mut config = valid();
        config.poll.retry_interval_s = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_empty_token_sends_no_credentials() {
        let mut source = SourceConfig::default();
        assert_eq!(source.credentials(), None);
        source.token = Some(String::new());
        assert_eq!(source.credentials(), None);
        source.token = Some(String::try_from("ghp_abc").unwrap());
        assert_eq!(source.credentials(), Some("ghp_abc"));
    }

    #[test]
    fn test_interval_saturates() {
        let poll = PollConfig {
            poll_interval_s: u32::MAX,
            retry_interval_s: 1,
        };
        assert_eq!(poll.poll_interval_ms(), u32::MAX);
        assert_eq!(poll.retry_interval_ms(), 1_000);
    }
}
