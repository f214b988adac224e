//! Piece module - shape matrices, spawning and rotation
//!
//! Every piece is a square matrix (2x2, 3x3 or 4x4) whose nonzero cells all
//! hold the kind's color index. The I piece is padded to 4x4 with its bar on
//! the top row so that every rotation is a plain quarter turn of a square.
//!
//! Rotation is a transpose followed by a row reversal (clockwise) or a
//! reversal of the row order (counter-clockwise).

use crate::grid::Grid;
use crate::types::{Cell, PieceKind, Rotation, EMPTY, GRID_WIDTH};

/// Largest matrix side length (the I piece)
pub const MAX_SIZE: usize = 4;

/// Square shape matrix with an explicit side length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: u8,
    cells: [[Cell; MAX_SIZE]; MAX_SIZE],
}

impl Matrix {
    /// Build from rows; `rows.len()` is the side length.
    ///
    /// Panics if the rows are not square or larger than [`MAX_SIZE`].
    pub fn from_rows<const N: usize>(rows: [[Cell; N]; N]) -> Self {
        assert!(N >= 1 && N <= MAX_SIZE, "matrix side must be 1..=4");
        let mut cells = [[EMPTY; MAX_SIZE]; MAX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..N].copy_from_slice(row);
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Canonical spawn matrix for a piece kind
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::T => Self::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
            PieceKind::O => Self::from_rows([[2, 2], [2, 2]]),
            PieceKind::L => Self::from_rows([[0, 3, 0], [0, 3, 0], [0, 3, 3]]),
            PieceKind::J => Self::from_rows([[0, 4, 0], [0, 4, 0], [4, 4, 0]]),
            PieceKind::I => Self::from_rows([
                [5, 5, 5, 5],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::S => Self::from_rows([[0, 6, 6], [6, 6, 0], [0, 0, 0]]),
            PieceKind::Z => Self::from_rows([[7, 7, 0], [0, 7, 7], [0, 0, 0]]),
        }
    }

    /// Side length (width == height)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at (x, y) within the matrix; 0 outside it
    pub fn get(&self, x: usize, y: usize) -> Cell {
        let n = self.size as usize;
        if x >= n || y >= n {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Rows of the matrix, `size` cells each
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let n = self.size as usize;
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// Nonzero cells as `(dx, dy, color)`
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let c = self.cells[y][x];
                (c != EMPTY).then_some((x as i8, y as i8, c))
            })
        })
    }

    /// Quarter turn in place
    pub fn rotate(&mut self, clockwise: bool) {
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..y {
                let t = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = t;
            }
        }
        if clockwise {
            for row in &mut self.cells[..n] {
                row[..n].reverse();
            }
        } else {
            self.cells[..n].reverse();
        }
    }
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub matrix: Matrix,
    /// Column of the matrix's left edge (may be negative)
    pub x: i8,
    /// Row of the matrix's top edge
    pub y: i8,
}

impl Piece {
    /// A new piece at the spawn position: horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = Matrix::canonical(kind);
        Self {
            kind,
            rotation: Rotation::North,
            matrix,
            x: ((GRID_WIDTH - matrix.size()) / 2) as i8,
            y: 0,
        }
    }

    pub fn color(&self) -> Cell {
        self.kind.color()
    }

    pub fn width(&self) -> u8 {
        self.matrix.size()
    }

    /// Does the piece overlap a block or leave the grid?
    pub fn collides(&self, grid: &Grid) -> bool {
        grid.collides(&self.matrix, self.x, self.y)
    }

    /// Quarter turn of the matrix and orientation, position unchanged
    pub fn rotate(&mut self, clockwise: bool) {
        self.matrix.rotate(clockwise);
        self.rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
    }

    /// Grid cells covered by the piece as `(x, y, color)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy, c)| (self.x + dx, self.y + dy, c))
    }
}

/// Horizontal displacements tried, in order, when a rotation collides.
///
/// Step `k` moves the piece by `k` columns in alternating direction
/// (+1, -2, +3, ...), giving cumulative offsets +1, -1, +2, -2, ...
/// An even step is only tried while the odd step after it would still fit
/// within `width`, so widths 3 and 4 both give `[1, -1, 2]`.
pub fn kick_offsets(width: u8) -> impl Iterator<Item = i8> {
    let width = width as i8;
    (1i8..)
        .take_while(move |&k| k % 2 == 1 || k < width)
        .scan(0i8, |acc, k| {
            *acc += if k % 2 == 1 { k } else { -k };
            Some(*acc)
        })
}

/// Rotate `piece` in place, searching horizontal kicks if the turn collides.
///
/// On failure the piece is restored exactly (matrix, orientation, column)
/// and false is returned.
pub fn rotate_with_kicks(piece: &mut Piece, grid: &Grid, clockwise: bool) -> bool {
    let origin_x = piece.x;
    piece.rotate(clockwise);
    if !piece.collides(grid) {
        return true;
    }

    for dx in kick_offsets(piece.width()) {
        piece.x = origin_x + dx;
        if !piece.collides(grid) {
            return true;
        }
    }

    piece.rotate(!clockwise);
    piece.x = origin_x;
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_centered() {
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 3);
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k).y == 0));
    }

    #[test]
    fn test_t_rotates_clockwise() {
        let mut m = Matrix::canonical(PieceKind::T);
        m.rotate(true);
        let rows: Vec<Vec<Cell>> = m.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn test_i_turns_vertical_in_last_column() {
        let mut m = Matrix::canonical(PieceKind::I);
        m.rotate(true);
        let cols: Vec<(i8, i8)> = m.occupied().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(cols, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_ccw_undoes_cw() {
        for kind in PieceKind::ALL {
            let original = Matrix::canonical(kind);
            let mut m = original;
            m.rotate(true);
            m.rotate(false);
            assert_eq!(m, original, "{:?}", kind);
        }
    }

    #[test]
    fn test_kick_offsets_sequence() {
        assert_eq!(kick_offsets(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(kick_offsets(3).collect::<Vec<_>>(), vec![1, -1, 2]);
        assert_eq!(kick_offsets(4).collect::<Vec<_>>(), vec![1, -1, 2]);
    }

    #[test]
    fn test_i_rotation_never_kicks_two_left() {
        let mut grid = Grid::new();
        for y in 11..14 {
            for x in 5..9 {
                grid.set(x, y, 7);
            }
        }
        let mut piece = Piece::spawn(PieceKind::I);
        piece.y = 10;
        assert!(!piece.collides(&grid));

        // Columns 6, 7, 5 and 8 are blocked; column 4 (x = 1) is free but
        // out of the kick range for a 4-wide matrix.
        assert!(!rotate_with_kicks(&mut piece, &grid, true));
        assert_eq!(piece.x, 3);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.matrix, Matrix::canonical(PieceKind::I));
    }

    #[test]
    fn test_rotation_kicks_off_left_wall() {
        let grid = Grid::new();
        // L's first column is empty, so it can sit with x = -1.
        let mut piece = Piece::spawn(PieceKind::L);
        piece.x = -1;
        piece.y = 5;
        assert!(!piece.collides(&grid));

        // Turned clockwise the bottom-left cell lands in column -1.
        assert!(rotate_with_kicks(&mut piece, &grid, true));
        assert!(!piece.collides(&grid));
        assert_eq!(piece.x, 0);
        assert_eq!(piece.rotation, Rotation::East);
    }

    #[test]
    fn test_failed_rotation_restores_piece() {
        let mut grid = Grid::new();
        // Box the T in so that no kick can help.
        for y in 0..20 {
            for x in 0..10 {
                grid.set(x, y, 1);
            }
        }
        let mut piece = Piece::spawn(PieceKind::T);
        piece.y = 10;
        for (x, y, _) in piece.cells().collect::<Vec<_>>() {
            grid.set(x, y, EMPTY);
        }
        let before = piece;

        assert!(!rotate_with_kicks(&mut piece, &grid, true));
        assert_eq!(piece, before);
    }
}
