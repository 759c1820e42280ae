//! Photo grid layout
//!
//! Maps each image's declared aspect class to a placement and packs the
//! placements into a dense, row-major grid where later items backfill the
//! holes left by spanning ones.

use crate::model::{AspectRatio, ImageItem};

/// Viewport widths at which the grid gains columns
pub const MEDIUM_BREAKPOINT: f32 = 768.0;
pub const LARGE_BREAKPOINT: f32 = 1024.0;

/// Placement class of a grid item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPlacement {
    /// Standard 1x1 cell, 1:1
    Square,
    /// Two rows tall, 2:3
    Tall,
    /// Two columns wide, 3:2
    Wide,
}

impl GridPlacement {
    pub fn row_span(self) -> usize {
        match self {
            Self::Tall => 2,
            _ => 1,
        }
    }

    pub fn column_span(self) -> usize {
        match self {
            Self::Wide => 2,
            _ => 1,
        }
    }

    /// Width / height ratio the image is cropped to
    pub fn aspect(self) -> f32 {
        match self {
            Self::Square => 1.0,
            Self::Tall => 2.0 / 3.0,
            Self::Wide => 3.0 / 2.0,
        }
    }
}

/// Placement for one item. `ignore_aspect` forces every item square.
pub fn placement(item: &ImageItem, ignore_aspect: bool) -> GridPlacement {
    if ignore_aspect {
        return GridPlacement::Square;
    }
    match item.aspect_ratio {
        Some(AspectRatio::Portrait) => GridPlacement::Tall,
        Some(AspectRatio::Landscape) => GridPlacement::Wide,
        Some(AspectRatio::Square) | None => GridPlacement::Square,
    }
}

pub fn placements(items: &[ImageItem], ignore_aspect: bool) -> Vec<GridPlacement> {
    items.iter().map(|item| placement(item, ignore_aspect)).collect()
}

/// Column count for a viewport width
pub fn columns_for_width(width: f32) -> usize {
    if width >= LARGE_BREAKPOINT {
        3
    } else if width >= MEDIUM_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Position of one item in the packed grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

/// Result of packing; `cells[i]` belongs to input item `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<GridCell>,
}

/// Dense auto-flow packing.
///
/// Every item is placed at the first free row-major position (searching
/// from the grid origin) where its span fits. On a single column the span
/// hints collapse to 1x1.
pub fn pack(placements: &[GridPlacement], columns: usize) -> GridLayout {
    let columns = columns.max(1);
    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let mut cells = Vec::with_capacity(placements.len());

    for p in placements {
        let (row_span, column_span) = if columns == 1 {
            (1, 1)
        } else {
            (p.row_span(), p.column_span().min(columns))
        };

        let mut row = 0;
        let (row, column) = loop {
            let fit = (0..=columns - column_span)
                .find(|&col| region_free(&occupied, row, col, row_span, column_span));
            if let Some(col) = fit {
                break (row, col);
            }
            row += 1;
        };

        while occupied.len() < row + row_span {
            occupied.push(vec![false; columns]);
        }
        for line in occupied.iter_mut().skip(row).take(row_span) {
            for slot in line.iter_mut().skip(column).take(column_span) {
                *slot = true;
            }
        }

        cells.push(GridCell {
            row,
            column,
            row_span,
            column_span,
        });
    }

    GridLayout {
        columns,
        rows: occupied.len(),
        cells,
    }
}

fn region_free(occupied: &[Vec<bool>], row: usize, col: usize, rows: usize, cols: usize) -> bool {
    (row..row + rows).all(|r| match occupied.get(r) {
        Some(line) => line[col..col + cols].iter().all(|taken| !taken),
        None => true,
    })
}

/// Pixel geometry of the grid: square row tracks as wide as a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub column_width: f32,
    pub gap: f32,
}

/// Rectangle of a cell relative to the grid origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridMetrics {
    /// Derive the column width from the available width
    pub fn for_width(available: f32, columns: usize, gap: f32) -> Self {
        let columns = columns.max(1) as f32;
        let column_width = ((available - gap * (columns - 1.0)) / columns).max(1.0);
        Self { column_width, gap }
    }

    pub fn bounds(&self, cell: &GridCell) -> CellBounds {
        let step = self.column_width + self.gap;
        CellBounds {
            x: cell.column as f32 * step,
            y: cell.row as f32 * step,
            width: self.track_extent(cell.column_span),
            height: self.track_extent(cell.row_span),
        }
    }

    pub fn total_height(&self, rows: usize) -> f32 {
        self.track_extent(rows)
    }

    fn track_extent(&self, tracks: usize) -> f32 {
        if tracks == 0 {
            return 0.0;
        }
        tracks as f32 * self.column_width + (tracks - 1) as f32 * self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(aspect: Option<AspectRatio>) -> ImageItem {
        let mut img = ImageItem::new("id", "url");
        img.aspect_ratio = aspect;
        img
    }

    fn cell(row: usize, column: usize, row_span: usize, column_span: usize) -> GridCell {
        GridCell {
            row,
            column,
            row_span,
            column_span,
        }
    }

    #[test]
    fn test_placement_policy() {
        assert_eq!(placement(&item(Some(AspectRatio::Portrait)), false), GridPlacement::Tall);
        assert_eq!(placement(&item(Some(AspectRatio::Landscape)), false), GridPlacement::Wide);
        assert_eq!(placement(&item(Some(AspectRatio::Square)), false), GridPlacement::Square);
        assert_eq!(placement(&item(None), false), GridPlacement::Square);
    }

    #[test]
    fn test_override_forces_square() {
        for aspect in [None, Some(AspectRatio::Portrait), Some(AspectRatio::Landscape)] {
            assert_eq!(placement(&item(aspect), true), GridPlacement::Square);
        }
    }

    #[test]
    fn test_spans_and_ratios() {
        assert_eq!(GridPlacement::Tall.row_span(), 2);
        assert_eq!(GridPlacement::Tall.column_span(), 1);
        assert_eq!(GridPlacement::Wide.column_span(), 2);
        assert_eq!(GridPlacement::Wide.row_span(), 1);
        assert!((GridPlacement::Tall.aspect() - 2.0 / 3.0).abs() < f32::EPSILON);
        assert!((GridPlacement::Wide.aspect() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(400.0), 1);
        assert_eq!(columns_for_width(768.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1440.0), 3);
    }

    #[test]
    fn test_pack_three_columns() {
        use GridPlacement::*;
        let layout = pack(&[Wide, Square, Tall, Square, Square], 3);
        assert_eq!(
            layout.cells,
            vec![
                cell(0, 0, 1, 2),
                cell(0, 2, 1, 1),
                cell(1, 0, 2, 1),
                cell(1, 1, 1, 1),
                cell(1, 2, 1, 1),
            ]
        );
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_pack_backfills_gaps() {
        use GridPlacement::*;
        // The wide item cannot fit next to the first square, so it drops a
        // row and the trailing square fills the hole it left.
        let layout = pack(&[Square, Wide, Square], 2);
        assert_eq!(
            layout.cells,
            vec![cell(0, 0, 1, 1), cell(1, 0, 1, 2), cell(0, 1, 1, 1)]
        );
        assert_eq!(layout.rows, 2);
    }

    #[test]
    fn test_pack_single_column_collapses_spans() {
        use GridPlacement::*;
        let layout = pack(&[Tall, Wide, Square], 1);
        assert_eq!(
            layout.cells,
            vec![cell(0, 0, 1, 1), cell(1, 0, 1, 1), cell(2, 0, 1, 1)]
        );
    }

    #[test]
    fn test_pack_empty() {
        let layout = pack(&[], 3);
        assert_eq!(layout.rows, 0);
        assert!(layout.cells.is_empty());
    }

    #[test]
    fn test_metrics() {
        let metrics = GridMetrics::for_width(320.0, 3, 10.0);
        assert!((metrics.column_width - 100.0).abs() < 1e-4);

        let b = metrics.bounds(&cell(1, 1, 2, 1));
        assert_eq!((b.x, b.y), (110.0, 110.0));
        assert_eq!((b.width, b.height), (100.0, 210.0));
        assert_eq!(metrics.total_height(3), 320.0);
        assert_eq!(metrics.total_height(0), 0.0);
    }
}
