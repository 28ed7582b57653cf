//! Link bring-up

use embedded_hal_async::delay::DelayNs;

use crate::traits::{ConnectError, Link, LinkStatus};

/// Maximum number of status waits
pub const CONNECT_ATTEMPTS: u8 = 10;

/// Wait between status checks (ms)
pub const CONNECT_POLL_MS: u32 = 1000;

/// Join a network and wait for the link to settle
///
/// Polls the link status until it is up or has failed, waiting
/// [`CONNECT_POLL_MS`] between checks for at most [`CONNECT_ATTEMPTS`]
/// waits. Only an `Up` link counts as success.
pub async fn connect<L: Link, D: DelayNs>(
    link: &mut L,
    ssid: &str,
    password: &str,
    delay: &mut D,
) -> Result<(), ConnectError> {
    info!("Joining network {}", ssid);
    link.begin(ssid, password).await?;

    let mut status = link.status();
    for _ in 0..CONNECT_ATTEMPTS {
        if status.is_settled() {
            break;
        }
        debug!("Waiting for connection...");
        delay.delay_ms(CONNECT_POLL_MS).await;
        status = link.status();
    }

    match status {
        LinkStatus::Up => Ok(()),
        LinkStatus::Failed => Err(ConnectError::Rejected),
        LinkStatus::Idle | LinkStatus::Connecting => Err(ConnectError::Timeout),
    }
}
