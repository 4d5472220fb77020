//! Shape module - tetromino matrices and the static shape catalog
//!
//! A shape is a small boolean matrix. Rotation never mutates a shape in place;
//! it builds a new matrix (rows reversed, then transposed), so rotating four
//! times yields a cell-for-cell identical shape.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Largest matrix side a shape may have.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Upper bound on occupied cells in a shape.
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Offset of a single occupied cell relative to the shape origin (dx, dy)
pub type CellOffset = (i8, i8);

/// Immutable 2-D occupancy matrix.
///
/// Slots outside `width` x `height` are always empty, so derived equality is
/// cell-for-cell equality of the visible matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from a `{0,1}` matrix.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const) if the matrix is empty or
    /// larger than 4x4.
    pub const fn from_matrix<const W: usize, const H: usize>(matrix: [[u8; W]; H]) -> Self {
        assert!(W > 0 && H > 0, "shape matrix must not be empty");
        assert!(
            W <= MAX_SHAPE_SIDE && H <= MAX_SHAPE_SIDE,
            "shape matrix larger than 4x4"
        );

        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                rows[y][x] = matrix[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            width: W as u8,
            height: H as u8,
            rows,
        }
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at column `x`, row `y` is occupied.
    /// Out-of-matrix coordinates are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Occupied cells as (dx, dy) offsets, row-major order.
    pub fn cells(&self) -> ArrayVec<CellOffset, MAX_SHAPE_CELLS> {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// 90° clockwise rotation.
    ///
    /// `new[r][c] = old[height - 1 - c][r]`; width and height swap.
    pub fn rotate_cw(&self) -> Self {
        let old_h = self.height as usize;
        let new_w = self.height as usize;
        let new_h = self.width as usize;

        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter_mut().enumerate().take(new_h) {
            for (c, cell) in row.iter_mut().enumerate().take(new_w) {
                *cell = self.rows[old_h - 1 - c][r];
            }
        }

        Self {
            width: new_w as u8,
            height: new_h as u8,
            rows,
        }
    }

    /// Matrix rows as `{0,1}` vectors, top to bottom.
    ///
    /// Allocates; meant for assertions in tests, not for the game path.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.rows[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// One catalog entry: a shape in spawn orientation and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

/// The seven tetrominoes in spawn orientation.
pub static CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        kind: PieceKind::I,
        shape: Shape::from_matrix([[1, 1, 1, 1]]),
        color: Color::Cyan,
    },
    CatalogEntry {
        kind: PieceKind::O,
        shape: Shape::from_matrix([[1, 1], [1, 1]]),
        color: Color::Yellow,
    },
    CatalogEntry {
        kind: PieceKind::S,
        shape: Shape::from_matrix([[0, 1, 1], [1, 1, 0]]),
        color: Color::Green,
    },
    CatalogEntry {
        kind: PieceKind::Z,
        shape: Shape::from_matrix([[1, 1, 0], [0, 1, 1]]),
        color: Color::Red,
    },
    CatalogEntry {
        kind: PieceKind::J,
        shape: Shape::from_matrix([[1, 0, 0], [1, 1, 1]]),
        color: Color::Blue,
    },
    CatalogEntry {
        kind: PieceKind::L,
        shape: Shape::from_matrix([[0, 0, 1], [1, 1, 1]]),
        color: Color::Orange,
    },
    CatalogEntry {
        kind: PieceKind::T,
        shape: Shape::from_matrix([[0, 1, 0], [1, 1, 1]]),
        color: Color::Purple,
    },
];

/// Every catalog entry, in stable order.
pub fn all_shapes() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Catalog entry for a kind.
pub fn entry_for(kind: PieceKind) -> &'static CatalogEntry {
    match kind {
        PieceKind::I => &CATALOG[0],
        PieceKind::O => &CATALOG[1],
        PieceKind::S => &CATALOG[2],
        PieceKind::Z => &CATALOG[3],
        PieceKind::J => &CATALOG[4],
        PieceKind::L => &CATALOG[5],
        PieceKind::T => &CATALOG[6],
    }
}
