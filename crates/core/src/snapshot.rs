//! Read-only Block Cascade state handed to renderers and observers.

use std::hash::{Hash, Hasher};

use crate::game_state::Status;
use crate::piece::{Matrix, Piece};
use crate::types::{Cell, PieceKind, Rotation, BASE_DROP_MS, EMPTY, GRID_HEIGHT, GRID_WIDTH};

const W: usize = GRID_WIDTH as usize;
const H: usize = GRID_HEIGHT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Covered grid cells as `(x, y, color)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy, c)| (self.x + dx, self.y + dy, c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; W]; H],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines: u32,
    pub running: bool,
    pub status: Status,
    pub piece_id: u32,
    pub seed: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Settled blocks with the active piece drawn on top.
    ///
    /// Active cells outside the grid are dropped.
    pub fn composite(&self) -> [[Cell; W]; H] {
        let mut out = self.grid;
        for (x, y, c) in self.active.cells() {
            if (0..W as i8).contains(&x) && (0..H as i8).contains(&y) {
                out[y as usize][x as usize] = c;
            }
        }
        out
    }

    /// Stable 64-bit FNV-1a hash of the whole snapshot.
    ///
    /// Used to skip redraws when nothing visible changed. `DefaultHasher`
    /// output is not guaranteed stable across releases.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Fnv1aHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[EMPTY; W]; H],
            active: ActiveSnapshot::from(Piece::spawn(PieceKind::O)),
            score: 0,
            lines: 0,
            running: false,
            status: Status::Ready,
            piece_id: 0,
            seed: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}

/// 64-bit FNV-1a.
#[derive(Debug, Clone)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
