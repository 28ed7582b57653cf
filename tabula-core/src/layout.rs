//! Fixed-grid table layout
//!
//! Fits a table into a fixed character grid. Every column gets the same
//! nominal slot (`display_width / columns`) and uses the smaller of that slot
//! and its own widest cell. Columns are clipped independently rather than
//! balanced, so short columns leave the rest of their slot to nobody.
//!
//! Horizontal positions and widths are in character cells; vertical
//! positions are in pixels.

use alloc::string::String;
use alloc::vec::Vec;

use crate::table::Table;

/// Appended to truncated cells
pub const ELLIPSIS: &str = "...";

/// Grid geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridGeometry {
    /// Display width in character cells
    pub display_width: u16,
    /// Display height in pixels
    pub display_height: u16,
    /// Vertical distance between data rows in pixels
    pub row_pitch: u16,
    /// Y position of the first data row in pixels
    pub header_row_height: u16,
}

/// Per-column width budget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Width of each column in character cells
    pub widths: Vec<usize>,
}

impl ColumnLayout {
    /// Compute column budgets for a table
    ///
    /// A column's budget is the smaller of its widest cell and an equal share
    /// of the display width, but never less than one cell.
    pub fn compute(table: &Table, display_width: u16) -> Self {
        let columns = table.column_count();
        if columns == 0 {
            return Self::default();
        }

        let slot = usize::from(display_width) / columns;

        let widths = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let widest = table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| char_len(cell))
                    .fold(char_len(header), usize::max);
                widest.min(slot).max(1)
            })
            .collect();

        Self { widths }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// A clipped cell at its grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    /// Column position in character cells
    pub x: u32,
    /// Row position in pixels
    pub y: u32,
    /// Visible text
    pub text: String,
}

/// Result of laying out a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Column budgets
    pub columns: ColumnLayout,
    /// Header cells (at `y = 0`)
    pub header: Vec<PlacedCell>,
    /// Data cells of the rows that fit
    pub cells: Vec<PlacedCell>,
    /// Number of data rows that fit on the display
    pub rows_shown: usize,
}

impl Grid {
    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over header and data cells in drawing order
    pub fn placed(&self) -> impl Iterator<Item = &PlacedCell> {
        self.header.iter().chain(self.cells.iter())
    }
}

/// Lay out a table on the grid
///
/// Data rows start at `header_row_height` and advance by `row_pitch`; a row
/// is only placed while its cursor plus one pitch stays above the bottom
/// edge. Rows that do not fit are dropped. Cells beyond the header count are
/// never placed.
pub fn layout(table: &Table, geometry: &GridGeometry) -> Grid {
    let columns = ColumnLayout::compute(table, geometry.display_width);
    if columns.is_empty() {
        return Grid::default();
    }

    let header = place_row(&table.headers, &columns, 0);

    let pitch = u32::from(geometry.row_pitch);
    let height = u32::from(geometry.display_height);
    let mut y = u32::from(geometry.header_row_height);
    let mut cells = Vec::new();
    let mut rows_shown = 0;

    if pitch > 0 {
        for row in &table.rows {
            if y + pitch >= height {
                break;
            }
            cells.extend(place_row(row, &columns, y));
            rows_shown += 1;
            y += pitch;
        }
    }

    Grid {
        columns,
        header,
        cells,
        rows_shown,
    }
}

/// Place one row, advancing the cursor by each column's budget
fn place_row(row: &[String], columns: &ColumnLayout, y: u32) -> Vec<PlacedCell> {
    let mut x = 0u32;
    row.iter()
        .zip(columns.widths.iter())
        .map(|(text, &width)| {
            let cell = PlacedCell {
                x,
                y,
                text: truncate(text, width),
            };
            x = x.saturating_add(u32::try_from(width).unwrap_or(u32::MAX));
            cell
        })
        .collect()
}

/// Truncate text to a budget of `width` characters
///
/// Text that fits is returned unchanged. Longer text keeps its first
/// `width - 3` characters followed by an ellipsis, which is itself clipped
/// when the budget is below three, so the result is never longer than
/// `width`.
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return String::from(text);
    }

    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.extend(ELLIPSIS.chars().take(width - keep));
    out
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
