//! `tabula_core::Display` implementation for OLED panels

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use tabula_core::{Display, DisplayError};

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::panel::Panel;

/// Text display drawing into a frame buffer and flushing it to a panel
///
/// Uses the 5x8 ASCII font, so a 5 pixel glyph width and 8 pixel row pitch
/// fill the panel without gaps. Characters outside ASCII are drawn as `?`.
pub struct OledDisplay<P> {
    panel: P,
    frame: FrameBuffer,
}

impl<P: Panel> OledDisplay<P> {
    /// Create a display with a blank frame
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            frame: FrameBuffer::new(),
        }
    }

    /// Initialize the panel
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init().await
    }

    /// Get the pending frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Get the panel
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Consume the display and return the panel
    pub fn into_panel(self) -> P {
        self.panel
    }
}

impl<P: Panel> Display for OledDisplay<P> {
    fn width(&self) -> u16 {
        WIDTH as u16
    }

    fn height(&self) -> u16 {
        HEIGHT as u16
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame.clear();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let text = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top);
        match text.draw(&mut self.frame) {
            Ok(_) => Ok(()),
            Err(e) => match e {},
        }
    }

    async fn commit(&mut self) -> Result<(), DisplayError> {
        self.panel.flush(&self.frame).await
    }
}
