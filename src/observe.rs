//! JSON observation of a Block Cascade snapshot.
//!
//! Emitted as one JSON object per line by `cascade-sim`, for scripting and
//! replay comparisons.

use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, LockEvent};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveObservation {
    /// Lowercase kind letter
    pub kind: String,
    pub rotation: String,
    pub x: i8,
    pub y: i8,
    /// Square shape matrix of color indices
    pub matrix: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockObservation {
    pub lines_cleared: u32,
    pub points: u32,
    pub board_full: bool,
}

impl From<LockEvent> for LockObservation {
    fn from(ev: LockEvent) -> Self {
        Self {
            lines_cleared: ev.lines_cleared,
            points: ev.points,
            board_full: ev.board_full,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeObservation {
    pub step: u64,
    pub seed: u32,
    pub piece_id: u32,
    pub running: bool,
    pub score: u32,
    pub lines: u32,
    pub status: String,
    pub grid: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: ActiveObservation,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_lock: Option<LockObservation>,
    /// FNV-1a of the snapshot, for cheap equality checks across runs
    pub state_hash: String,
}

pub fn build_observation(
    snap: &GameSnapshot,
    step: u64,
    last_lock: Option<LockEvent>,
) -> CascadeObservation {
    let active = &snap.active;
    CascadeObservation {
        step,
        seed: snap.seed,
        piece_id: snap.piece_id,
        running: snap.running,
        score: snap.score,
        lines: snap.lines,
        status: snap.status.to_string(),
        grid: snap.grid,
        active: ActiveObservation {
            kind: active.kind.as_str().to_string(),
            rotation: active.rotation.as_str().to_string(),
            x: active.x,
            y: active.y,
            matrix: active.matrix.rows().map(|r| r.to_vec()).collect(),
        },
        last_lock: last_lock.map(LockObservation::from),
        state_hash: format!("{:016x}", snap.fingerprint()),
    }
}
