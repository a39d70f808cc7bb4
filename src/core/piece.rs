//! Piece module - tetromino shape matrices and rotation
//!
//! Each piece is a rectangular 0/1 matrix plus a kind (which fixes its color)
//! and a top-left-anchored board position. Rotation is transpose-and-reverse;
//! whether a rotation sticks is decided by the caller's collision check.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Spawn templates, one row per inner slice.
const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

/// Occupied-cell offsets of a shape, relative to its top-left anchor.
///
/// Every tetromino has exactly four occupied cells.
pub type ShapeCells = ArrayVec<(i8, i8), 4>;

/// Rectangular 0/1 cell matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<u8>>,
}

impl Shape {
    /// Spawn-orientation shape for a piece kind.
    pub fn for_kind(kind: PieceKind) -> Self {
        let template = match kind {
            PieceKind::I => I_ROWS,
            PieceKind::O => O_ROWS,
            PieceKind::T => T_ROWS,
            PieceKind::S => S_ROWS,
            PieceKind::Z => Z_ROWS,
            PieceKind::J => J_ROWS,
            PieceKind::L => L_ROWS,
        };
        Self {
            rows: template.iter().map(|row| row.to_vec()).collect(),
        }
    }

    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    /// Width in columns.
    pub fn width(&self) -> u8 {
        self.rows[0].len() as u8
    }

    /// Height in rows.
    pub fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    /// Whether the cell at (column, row) is occupied.
    /// Out-of-matrix coordinates read as empty.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .map(|&v| v != 0)
            .unwrap_or(false)
    }

    /// Offsets of the occupied cells, row-major.
    pub fn cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    let _ = cells.try_push((x as i8, y as i8));
                }
            }
        }
        cells
    }

    /// The shape rotated 90 degrees clockwise (transpose and reverse).
    ///
    /// An R x C matrix becomes C x R; four rotations restore the original.
    pub fn rotated_cw(&self) -> Self {
        let old_h = self.rows.len();
        let old_w = self.rows[0].len();
        let mut rows = vec![vec![0u8; old_h]; old_w];
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                rows[x][old_h - 1 - y] = v;
            }
        }
        Self { rows }
    }
}

/// Active falling piece: shape matrix, kind (color), top-left board position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centered on the
    /// top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::for_kind(kind);
        let x = ((BOARD_WIDTH - shape.width()) / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Occupied-cell offsets of the current shape.
    pub fn cells(&self) -> ShapeCells {
        self.shape.cells()
    }

    /// A copy rotated clockwise in place (same anchor).
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(
                Shape::for_kind(kind).cells().len(),
                4,
                "{:?} is not a tetromino",
                kind
            );
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let shape = Shape::for_kind(PieceKind::I);
        assert_eq!((shape.width(), shape.height()), (4, 1));

        let rotated = shape.rotated_cw();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
    }

    #[test]
    fn test_four_rotations_restore_original() {
        for kind in PieceKind::ALL {
            let original = Shape::for_kind(kind);
            let mut shape = original.clone();
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, original, "{:?} did not return to spawn shape", kind);
        }
    }

    #[test]
    fn test_t_rotates_to_point_right() {
        // T spawns pointing up; one clockwise turn points it right.
        let rotated = Shape::for_kind(PieceKind::T).rotated_cw();
        assert_eq!(
            rotated,
            Shape::from_rows(vec![vec![1, 0], vec![1, 1], vec![1, 0]])
        );
    }

    #[test]
    fn test_spawn_is_centered_on_top_row() {
        let i = Piece::spawn(PieceKind::I);
        assert_eq!((i.x, i.y), (3, 0));

        let o = Piece::spawn(PieceKind::O);
        assert_eq!((o.x, o.y), (4, 0));

        let t = Piece::spawn(PieceKind::T);
        assert_eq!((t.x, t.y), (3, 0));
    }

    #[test]
    fn test_is_set_reads_zero_outside_matrix() {
        let shape = Shape::for_kind(PieceKind::O);
        assert!(shape.is_set(0, 0));
        assert!(!shape.is_set(5, 0));
        assert!(!shape.is_set(0, 5));
    }
}
