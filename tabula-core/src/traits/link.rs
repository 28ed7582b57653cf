//! Network link trait (WiFi station)

use core::fmt;

/// Link bring-up errors
///
/// All of these are fatal: the poll loop never retries a failed bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectError {
    /// Radio could not be started or rejected the join request
    Radio,
    /// Link still not up after the bounded wait
    Timeout,
    /// Access point refused the association (bad password, no AP)
    Rejected,
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::Radio => f.write_str("WiFi radio failure"),
            ConnectError::Timeout => f.write_str("WiFi connection timed out"),
            ConnectError::Rejected => f.write_str("WiFi connection failed"),
        }
    }
}

/// Link status as reported by the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Not joined
    Idle,
    /// Join in progress
    Connecting,
    /// Joined with an address assigned
    Up,
    /// Join failed
    Failed,
}

impl LinkStatus {
    /// Check if the join attempt has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, LinkStatus::Up | LinkStatus::Failed)
    }
}

/// Trait for the network link
#[allow(async_fn_in_trait)]
pub trait Link {
    /// Start joining the given network
    ///
    /// Returns once the join request has been issued; progress is observed
    /// through [`Link::status`].
    async fn begin(&mut self, ssid: &str, password: &str) -> Result<(), ConnectError>;

    /// Current link status
    fn status(&mut self) -> LinkStatus;
}
