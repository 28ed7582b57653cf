//! Screen rendering
//!
//! Turns a laid-out table or a one-line status message into draw calls on a
//! [`Display`]. Every render is clear, draw, commit, so the panel only ever
//! shows complete frames.

use core::fmt;

use crate::config::DisplayConfig;
use crate::layout::{layout, GridGeometry};
use crate::table::Table;
use crate::traits::{Display, DisplayError};

/// Placeholder shown when the document has no table
pub const NO_TABLE_MESSAGE: &str = "No table found";

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Display rejected a draw or commit
    Display(DisplayError),
}

impl From<DisplayError> for RenderError {
    fn from(e: DisplayError) -> Self {
        RenderError::Display(e)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Display(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Table renderer
pub struct Renderer<D> {
    display: D,
    metrics: DisplayConfig,
}

impl<D: Display> Renderer<D> {
    /// Create a renderer drawing with the given text metrics
    pub fn new(display: D, metrics: DisplayConfig) -> Self {
        Self { display, metrics }
    }

    /// Get the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consume the renderer and return the display
    pub fn into_display(self) -> D {
        self.display
    }

    /// Grid geometry for the attached display
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            display_width: self.display.width() / self.metrics.glyph_width.max(1),
            display_height: self.display.height(),
            row_pitch: self.metrics.row_pitch,
            header_row_height: self.metrics.header_row_height,
        }
    }

    /// Render a table
    ///
    /// Falls back to the "no table" placeholder when the table has no
    /// columns. Returns the number of data rows that fit.
    pub async fn render_table(&mut self, table: &Table) -> Result<usize, RenderError> {
        let grid = layout(table, &self.geometry());
        if grid.is_empty() {
            self.render_message(NO_TABLE_MESSAGE).await?;
            return Ok(0);
        }

        self.display.clear()?;
        let glyph_width = u32::from(self.metrics.glyph_width);
        for cell in grid.placed() {
            let x = to_coord(cell.x.saturating_mul(glyph_width));
            let y = to_coord(cell.y);
            self.display.draw_text(&cell.text, x, y)?;
        }
        self.display.commit().await?;

        Ok(grid.rows_shown)
    }

    /// Render a single-line status message at the top left corner
    pub async fn render_message(&mut self, text: &str) -> Result<(), RenderError> {
        self.display.clear()?;
        self.display.draw_text(text, 0, 0)?;
        self.display.commit().await?;
        Ok(())
    }
}

fn to_coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;
    use crate::testing::{MockDisplay, Op};
    use embassy_futures::block_on;

    fn metrics() -> DisplayConfig {
        DisplayConfig {
            glyph_width: 8,
            row_pitch: 8,
            header_row_height: 10,
        }
    }

    #[test]
    fn test_geometry_in_cells() {
        let renderer = Renderer::new(MockDisplay::new(128, 64), metrics());
        let geometry = renderer.geometry();
        assert_eq!(geometry.display_width, 16);
        assert_eq!(geometry.display_height, 64);
    }

    #[test]
    fn test_render_table() {
        let mut renderer = Renderer::new(MockDisplay::new(128, 64), metrics());
        let table = parse_table("|Host|Load|\n|---|---|\n|alpha|0.5|\n|beta|1.25|").unwrap();

        let shown = block_on(renderer.render_table(&table)).unwrap();
        assert_eq!(shown, 2);

        let ops = &renderer.display().ops;
        assert_eq!(ops.first(), Some(&Op::Clear));
        assert_eq!(ops.last(), Some(&Op::Commit));
        // Column 0 is 5 cells wide ("alpha"), so column 1 starts at 40 px
        assert!(ops.contains(&Op::text("Host", 0, 0)));
        assert!(ops.contains(&Op::text("Load", 40, 0)));
        assert!(ops.contains(&Op::text("alpha", 0, 10)));
        assert!(ops.contains(&Op::text("1.25", 40, 18)));
    }

    #[test]
    fn test_render_raw_pixel_units() {
        // Glyph width 1 keeps budgets in raw display units
        let metrics = DisplayConfig {
            glyph_width: 1,
            ..metrics()
        };
        let mut renderer = Renderer::new(MockDisplay::new(128, 64), metrics);
        let table = parse_table("|A|B|\n|---|---|\n|xyz|w|").unwrap();
        block_on(renderer.render_table(&table)).unwrap();
        assert!(renderer.display().ops.contains(&Op::text("w", 3, 10)));
    }

    #[test]
    fn test_render_empty_table_shows_placeholder() {
        let mut renderer = Renderer::new(MockDisplay::new(128, 64), metrics());
        let shown = block_on(renderer.render_table(&Table::default())).unwrap();
        assert_eq!(shown, 0);
        assert_eq!(renderer.display().last_message(), Some(NO_TABLE_MESSAGE));
    }

    #[test]
    fn test_render_message() {
        let mut renderer = Renderer::new(MockDisplay::new(128, 64), metrics());
        block_on(renderer.render_message("Hello")).unwrap();
        assert_eq!(
            renderer.display().ops,
            vec![Op::Clear, Op::text("Hello", 0, 0), Op::Commit]
        );
    }

    #[test]
    fn test_commit_failure_propagates() {
        let mut display = MockDisplay::new(128, 64);
        display.fail_commit = true;
        let mut renderer = Renderer::new(display, metrics());
        let result = block_on(renderer.render_message("Hello"));
        assert_eq!(
            result,
            Err(RenderError::Display(DisplayError::Communication))
        );
    }

    #[test]
    fn test_draw_failure_stops_frame() {
        let mut display = MockDisplay::new(128, 64);
        display.fail_draw = true;
        let mut renderer = Renderer::new(display, metrics());
        let table = parse_table("|A|\n|---|\n|1|").unwrap();
        assert!(block_on(renderer.render_table(&table)).is_err());
        assert!(!renderer.display().ops.contains(&Op::Commit));
    }
}
