//! Display trait for the table screen

use core::fmt;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display bus error"),
            DisplayError::NotInitialized => f.write_str("display not initialized"),
            DisplayError::BufferOverflow => f.write_str("display buffer overflow"),
        }
    }
}

/// Pixel-addressed monochrome text display
///
/// Drawing goes to an off-screen frame; nothing becomes visible until
/// [`Display::commit`] is called, so a frame is always shown whole.
#[allow(async_fn_in_trait)]
pub trait Display {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Clear the pending frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)` pixels
    ///
    /// Text running past the right or bottom edge is clipped.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;

    /// Send the pending frame to the panel
    async fn commit(&mut self) -> Result<(), DisplayError>;
}
