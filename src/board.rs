//! Perimeter layout of a square board.
//!
//! A board of size N is an N×N grid of which only the outer ring is played
//! on. Tiles are numbered 1..=4N-4 clockwise, starting at the top-left
//! corner, so that a token's location can be stored as a single linear
//! index and mapped back to a grid cell when drawing.

use crate::config::MIN_BOARD_SIZE;
use crate::error::ConfigError;

/// Number of tiles on one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(size));
        }
        Ok(BoardSize(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Tiles on the ring: 4N - 4.
    pub fn total_tiles(self) -> usize {
        4 * self.0 - 4
    }
}

/// Label printed on the four corner tiles, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    Start,
    Jail,
    Free,
    End,
}

impl CornerKind {
    const ORDER: [CornerKind; 4] = [
        CornerKind::Start,
        CornerKind::Jail,
        CornerKind::Free,
        CornerKind::End,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CornerKind::Start => "START",
            CornerKind::Jail => "JAIL",
            CornerKind::Free => "FREE",
            CornerKind::End => "END",
        }
    }
}

/// One perimeter cell. Rows and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDescriptor {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub is_corner: bool,
    pub corner: Option<CornerKind>,
}

/// Produces the clockwise perimeter walk for a board of `size` tiles per side.
pub fn layout(size: BoardSize) -> Vec<TileDescriptor> {
    let n = size.get();
    let mut cells = Vec::with_capacity(size.total_tiles());

    // Top edge, left to right
    for column in 1..=n {
        cells.push((1, column));
    }
    // Right edge, top to bottom, corners excluded
    for row in 2..n {
        cells.push((row, n));
    }
    // Bottom edge, right to left
    for column in (1..=n).rev() {
        cells.push((n, column));
    }
    // Left edge, bottom to top, corners excluded
    for row in (2..n).rev() {
        cells.push((row, 1));
    }

    let mut corners_seen = 0;
    cells
        .into_iter()
        .enumerate()
        .map(|(offset, (row, column))| {
            let is_corner = (row == 1 || row == n) && (column == 1 || column == n);
            let corner = if is_corner {
                let kind = CornerKind::ORDER[corners_seen];
                corners_seen += 1;
                Some(kind)
            } else {
                None
            };
            TileDescriptor {
                index: offset + 1,
                row,
                column,
                is_corner,
                corner,
            }
        })
        .collect()
}

/// The computed layout for one board size. Rebuilt only when the size changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    size: BoardSize,
    tiles: Vec<TileDescriptor>,
}

impl BoardLayout {
    pub fn new(size: BoardSize) -> Self {
        crate::debug_board!(
            "Laying out {}x{} board ({} tiles)",
            size.get(),
            size.get(),
            size.total_tiles()
        );
        BoardLayout {
            size,
            tiles: layout(size),
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn total_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[TileDescriptor] {
        &self.tiles
    }

    /// Looks up a tile by its 1-based linear index.
    pub fn tile(&self, index: usize) -> Option<&TileDescriptor> {
        index.checked_sub(1).and_then(|i| self.tiles.get(i))
    }

    /// Looks up the perimeter tile at a grid cell. Interior cells return `None`.
    pub fn tile_at(&self, row: usize, column: usize) -> Option<&TileDescriptor> {
        self.tiles
            .iter()
            .find(|t| t.row == row && t.column == column)
    }

    pub fn corners(&self) -> impl Iterator<Item = &TileDescriptor> {
        self.tiles.iter().filter(|t| t.is_corner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: usize) -> BoardLayout {
        BoardLayout::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_board_size_bounds() {
        assert_eq!(BoardSize::new(1), Err(ConfigError::BoardTooSmall(1)));
        assert_eq!(BoardSize::new(0), Err(ConfigError::BoardTooSmall(0)));
        assert_eq!(BoardSize::new(21).unwrap().total_tiles(), 80);
        assert_eq!(BoardSize::new(500).unwrap().total_tiles(), 1996);
        assert_eq!(BoardSize::new(2).unwrap().total_tiles(), 4);
        assert_eq!(BoardSize::new(10).unwrap().total_tiles(), 36);
    }

    #[test]
    fn test_default_board_corners() {
        let layout = board(10);
        assert_eq!(layout.total_tiles(), 36);
        let corners: Vec<usize> = layout.corners().map(|t| t.index).collect();
        assert_eq!(corners, vec![1, 10, 19, 28]);
    }

    #[test]
    fn test_corner_labels_follow_traversal() {
        let layout = board(10);
        let labels: Vec<(usize, &str)> = layout
            .corners()
            .map(|t| (t.index, t.corner.unwrap().label()))
            .collect();
        assert_eq!(
            labels,
            vec![(1, "START"), (10, "JAIL"), (19, "FREE"), (28, "END")]
        );
        assert!(layout.tiles().iter().filter(|t| !t.is_corner).all(|t| t.corner.is_none()));
    }

    #[test]
    fn test_segment_boundaries() {
        let layout = board(10);
        // Top edge
        assert_eq!(layout.tile(1).map(|t| (t.row, t.column)), Some((1, 1)));
        assert_eq!(layout.tile(10).map(|t| (t.row, t.column)), Some((1, 10)));
        // Right edge
        assert_eq!(layout.tile(11).map(|t| (t.row, t.column)), Some((2, 10)));
        assert_eq!(layout.tile(18).map(|t| (t.row, t.column)), Some((9, 10)));
        // Bottom edge runs right to left
        assert_eq!(layout.tile(19).map(|t| (t.row, t.column)), Some((10, 10)));
        assert_eq!(layout.tile(28).map(|t| (t.row, t.column)), Some((10, 1)));
        // Left edge runs bottom to top
        assert_eq!(layout.tile(29).map(|t| (t.row, t.column)), Some((9, 1)));
        assert_eq!(layout.tile(36).map(|t| (t.row, t.column)), Some((2, 1)));
    }

    #[test]
    fn test_smallest_board() {
        let layout = board(2);
        let cells: Vec<(usize, usize, bool)> = layout
            .tiles()
            .iter()
            .map(|t| (t.row, t.column, t.is_corner))
            .collect();
        assert_eq!(
            cells,
            vec![(1, 1, true), (1, 2, true), (2, 2, true), (2, 1, true)]
        );
    }

    #[test]
    fn test_tile_lookup() {
        let layout = board(5);
        assert!(layout.tile(0).is_none());
        assert!(layout.tile(17).is_none());
        assert_eq!(layout.tile(16).unwrap().index, 16);
        assert_eq!(layout.tile_at(5, 5).unwrap().index, 9);
        assert!(layout.tile_at(3, 3).is_none());
    }

    #[test]
    fn test_neighbours_are_adjacent_cells() {
        let layout = board(7);
        let tiles = layout.tiles();
        for i in 0..tiles.len() {
            let a = tiles[i];
            let b = tiles[(i + 1) % tiles.len()];
            let distance = a.row.abs_diff(b.row) + a.column.abs_diff(b.column);
            assert_eq!(distance, 1, "tiles {} and {} are not adjacent", a.index, b.index);
        }
    }

    #[test]
    fn test_large_board_layout() {
        let layout = board(40);
        assert_eq!(layout.total_tiles(), 156);
        let corners: Vec<usize> = layout.corners().map(|t| t.index).collect();
        assert_eq!(corners, vec![1, 40, 79, 118]);
        assert_eq!(layout.tile(156).map(|t| (t.row, t.column)), Some((2, 1)));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let size = BoardSize::new(12).unwrap();
        assert_eq!(layout(size), layout(size));
    }
}
