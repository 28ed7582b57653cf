//! Poll loop state and failure records

use core::fmt::{self, Write};

use heapless::String;

use super::phase::{ErrorKind, Phase};

/// Maximum stored failure description (bytes)
pub const DESCRIPTION_LEN: usize = 64;

/// Characters of the description shown on the display
pub const SUMMARY_CHARS: usize = 20;

/// Prefix of on-screen error messages
pub const ERROR_PREFIX: &str = "Error: ";

/// Message shown when the loop halts
pub const FATAL_MESSAGE: &str = "Fatal error";

/// Maximum on-screen error message (bytes)
pub const SUMMARY_LEN: usize = ERROR_PREFIX.len() + SUMMARY_CHARS * 4;

/// A recorded failure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Failure {
    /// What failed
    pub kind: ErrorKind,
    /// Error description, cut at [`DESCRIPTION_LEN`] bytes
    pub description: String<DESCRIPTION_LEN>,
}

impl Failure {
    /// Record an error with its `Display` text as description
    pub fn new(kind: ErrorKind, error: &impl fmt::Display) -> Self {
        let mut description = String::new();
        let _ = write!(Truncating(&mut description), "{}", error);
        Self { kind, description }
    }

    /// One-line message for the display
    ///
    /// `"Error: "` followed by the first [`SUMMARY_CHARS`] characters of
    /// the description.
    pub fn summary(&self) -> String<SUMMARY_LEN> {
        let mut line = String::new();
        let _ = line.push_str(ERROR_PREFIX);
        for ch in self.description.chars().take(SUMMARY_CHARS) {
            let _ = line.push(ch);
        }
        line
    }
}

/// Writer that silently drops whatever does not fit
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Poll loop state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollState {
    /// Current phase
    pub phase: Phase,
    /// Most recent failure, cleared by the next successful render
    pub last_error: Option<Failure>,
    /// Frames committed since start
    pub frames: u32,
    /// Failures since the last successful render
    pub consecutive_failures: u32,
}

impl Default for PollState {
    fn default() -> Self {
        Self::new()
    }
}

impl PollState {
    /// Create the startup state
    pub fn new() -> Self {
        Self {
            phase: Phase::Connecting,
            last_error: None,
            frames: 0,
            consecutive_failures: 0,
        }
    }

    /// Record a failure
    pub fn record_failure(&mut self, failure: Failure) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.last_error = Some(failure);
    }

    /// Record a committed frame
    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
        self.consecutive_failures = 0;
        self.last_error = None;
    }
}
