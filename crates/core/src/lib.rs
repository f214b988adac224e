//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules and state of every game in the arcade. It has
//! no dependencies on the terminal or any I/O, so it can run under the
//! interactive front end, the headless simulator, tests and benchmarks alike.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield with collision, merge and row sweeping
//! - [`piece`]: square shape matrices, spawning and kick-corrected rotation
//! - [`game_state`]: the Block Cascade controller (commands, gravity clock, counters)
//! - [`snapshot`]: read-only Block Cascade state for renderers
//! - [`tiles`]: Tile Match
//! - [`solitaire`]: Relaxed Solitaire
//! - [`shell`]: which game tab is visible
//! - [`rng`]: seeded LCG shared by all games
//!
//! # Block Cascade Rules
//!
//! - Pieces are picked uniformly at random from the seven kinds
//! - Gravity drops the piece one row once the drop interval has elapsed
//! - A piece that cannot descend settles into the grid immediately
//! - Every complete row is removed and scores 100 points
//! - A blocked spawn wipes the board and counters and play continues
//!
//! # Example
//!
//! ```
//! use calm_arcade_core::{DropOutcome, GameState};
//! use calm_arcade_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn_kind(PieceKind::O);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! while game.soft_drop() == DropOutcome::Moved {}
//!
//! assert_eq!(game.grid().get(5, 19), Some(PieceKind::O.color()));
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Nothing here reads a clock. Call [`GameState::tick`] with the elapsed
//! milliseconds every frame (16ms in the terminal loop); gravity fires once
//! the accumulated time exceeds the drop interval (1000ms by default).

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shell;
pub mod snapshot;
pub mod solitaire;
pub mod tiles;

pub use calm_arcade_types as types;

pub use game_state::{DropOutcome, GameState, LockEvent, Phase, Status, Tick};
pub use grid::{ClearedRows, Grid};
pub use piece::{kick_offsets, rotate_with_kicks, Matrix, Piece};
pub use rng::SimpleRng;
pub use shell::Shell;
pub use snapshot::{ActiveSnapshot, Fnv1aHasher, GameSnapshot};
pub use solitaire::{Card, Solitaire, SolitaireStatus};
pub use tiles::{SelectOutcome, Tile, TileFace, TileMatch, TilesStatus};
