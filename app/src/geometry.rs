use serde::{Deserialize, Serialize};
use shoutou_core as game;

/// Pixel distance between the window origin and the board's top-left corner,
/// applied on both axes.
pub const GRID_OFFSET_PX: i32 = 25;

/// Default side length of the whole board in pixels.
pub const DEFAULT_GRID_PX: i32 = 200;

/// Axis-aligned pixel rectangle of one cell, as a renderer would draw it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Pixel placement of the board inside the window. Cell sizing is integer
/// division of the grid length, floored at one pixel, so the drawable span
/// need not match the configured length exactly.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    offset_px: i32,
    grid_px: i32,
    cells: game::Coord,
}

impl BoardLayout {
    pub fn new(cells: game::Coord) -> Self {
        Self {
            offset_px: GRID_OFFSET_PX,
            grid_px: DEFAULT_GRID_PX,
            cells: cells.max(1),
        }
    }

    pub fn cells(&self) -> game::Coord {
        self.cells
    }

    pub fn set_cells(&mut self, cells: game::Coord) {
        self.cells = cells.max(1);
    }

    pub fn offset_px(&self) -> i32 {
        self.offset_px
    }

    pub fn grid_px(&self) -> i32 {
        self.grid_px
    }

    pub fn cell_px(&self) -> i32 {
        (self.grid_px / i32::from(self.cells)).max(1)
    }

    /// Side length of the drawable board, `cell_px` times the cell count.
    pub fn span_px(&self) -> i32 {
        self.cell_px() * i32::from(self.cells)
    }

    /// Maps a pixel point to the cell under it, row from `y` and column from
    /// `x`. Points outside the half-open drawable span miss on both the near
    /// and the far edge.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<game::Coord2> {
        let Some(coords) = self.axis_cell(y).zip(self.axis_cell(x)) else {
            log::trace!("({}, {}) outside the board", x, y);
            return None;
        };
        Some(coords)
    }

    fn axis_cell(&self, pos: i32) -> Option<game::Coord> {
        let rel = pos - self.offset_px;
        if rel < 0 || rel >= self.span_px() {
            return None;
        }
        Some((rel / self.cell_px()).try_into().unwrap())
    }

    pub fn cell_rect(&self, (row, col): game::Coord2) -> CellRect {
        let cell_px = self.cell_px();
        CellRect {
            x: self.offset_px + i32::from(col) * cell_px,
            y: self.offset_px + i32::from(row) * cell_px,
            width: cell_px,
            height: cell_px,
        }
    }

    /// Resizes the board to two thirds of the window height, floored at one
    /// pixel per cell.
    pub fn fit_to_height(&mut self, window_height_px: i32) {
        self.grid_px = (window_height_px * 2 / 3).max(i32::from(self.cells));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_divides_grid_into_whole_cells() {
        assert_eq!(BoardLayout::new(3).cell_px(), 66);
        assert_eq!(BoardLayout::new(3).span_px(), 198);
        assert_eq!(BoardLayout::new(4).cell_px(), 50);
        assert_eq!(BoardLayout::new(5).span_px(), 200);
        // cell counts are clamped to at least one
        assert_eq!(BoardLayout::new(0).cell_px(), 200);
    }

    #[test]
    fn hit_test_maps_row_from_y_and_col_from_x() {
        let layout = BoardLayout::new(3);

        assert_eq!(layout.hit_test(100, 30), Some((0, 1)));
        assert_eq!(layout.hit_test(30, 100), Some((1, 0)));
        assert_eq!(layout.hit_test(25, 25), Some((0, 0)));
        assert_eq!(layout.hit_test(222, 222), Some((2, 2)));
    }

    #[test]
    fn hit_test_misses_outside_the_drawable_span() {
        let layout = BoardLayout::new(3);

        assert_eq!(layout.hit_test(24, 30), None);
        assert_eq!(layout.hit_test(30, 24), None);
        assert_eq!(layout.hit_test(-40, 40), None);
        // far edge is exclusive: offset + span = 25 + 198
        assert_eq!(layout.hit_test(223, 30), None);
        assert_eq!(layout.hit_test(30, 223), None);
    }

    #[test]
    fn cell_rect_offsets_by_column_and_row() {
        let layout = BoardLayout::new(3);

        assert_eq!(
            layout.cell_rect((0, 0)),
            CellRect {
                x: 25,
                y: 25,
                width: 66,
                height: 66
            }
        );
        assert_eq!(
            layout.cell_rect((2, 1)),
            CellRect {
                x: 91,
                y: 157,
                width: 66,
                height: 66
            }
        );
    }

    #[test]
    fn fit_to_height_takes_two_thirds_of_the_window() {
        let mut layout = BoardLayout::new(3);

        layout.fit_to_height(300);
        assert_eq!(layout.grid_px(), 200);

        layout.fit_to_height(90);
        assert_eq!(layout.grid_px(), 60);
        assert_eq!(layout.cell_px(), 20);
        assert_eq!(layout.offset_px(), GRID_OFFSET_PX);
    }

    #[test]
    fn degenerate_heights_keep_cells_drawable() {
        let mut layout = BoardLayout::new(5);

        layout.fit_to_height(0);

        assert_eq!(layout.cell_px(), 1);
        assert_eq!(layout.span_px(), 5);
        assert_eq!(layout.hit_test(27, 27), Some((2, 2)));
    }

    #[test]
    fn oversized_cell_counts_keep_cells_drawable() {
        // more cells than the default grid has pixels
        let layout = BoardLayout::new(250);

        assert_eq!(layout.cell_px(), 1);
        assert_eq!(layout.span_px(), 250);
        assert_eq!(layout.hit_test(25, 25), Some((0, 0)));
        assert_eq!(layout.hit_test(274, 274), Some((249, 249)));
        assert_eq!(layout.hit_test(275, 30), None);
    }
}
