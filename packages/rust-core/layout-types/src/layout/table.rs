//! Typeset table content

use serde::{Deserialize, Serialize};

use super::block::BlockPayload;
use crate::css::BoxStyle;
use crate::primitives::{BorderStyle, Rect};

/// How a cell participates in a vertical merge (`vMerge` in WordprocessingML).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum VerticalMerge {
    #[default]
    None,
    /// Starts a new vertical span.
    Restart,
    /// Extends the span started by the cell directly above; this cell is
    /// absent from the grid but contributes its row's height to the span.
    Continue,
}

/// A single laid-out table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCellLayout {
    pub frame: Rect,
    pub blocks: Vec<BlockPayload>,
    pub style: BoxStyle,
    /// Horizontal colspan.
    pub grid_span: u32,
    pub vertical_merge: VerticalMerge,
}

impl TableCellLayout {
    pub fn content_height(&self) -> f64 {
        self.frame.height
    }
}

/// One row of a laid-out table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCellLayout>,
    pub height: f64,
    /// Row must not be split across a page break.
    pub cant_split: bool,
    /// Row is repeated on every page break that splits this table.
    pub is_header_row: bool,
}

/// A fully laid-out table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub frame: Rect,
    pub rows: Vec<TableRow>,
    /// X offsets of vertical grid lines, relative to `frame.x`.
    pub grid_lines: Vec<f64>,
    pub style: BoxStyle,
    /// Table-wide default border, drawn as the grid lines between cells
    /// and as the fallback for any cell edge without its own border.
    pub grid_border: Option<BorderStyle>,
}

impl TableLayout {
    pub fn column_count(&self) -> usize {
        self.grid_lines.len().saturating_sub(1).max(
            self.rows
                .first()
                .map(|r| r.cells.iter().map(|c| c.grid_span as usize).sum())
                .unwrap_or(0),
        )
    }

    /// Header rows at the start of the table, repeated on every continuation
    /// page produced when the table is split.
    pub fn header_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().take_while(|r| r.is_header_row)
    }
}
