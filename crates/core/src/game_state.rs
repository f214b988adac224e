//! Game state module - the Block Cascade controller
//!
//! Ties together grid, active piece, RNG, counters and the gravity clock.
//! Every mutation is validated against the grid before it is committed, so
//! no command can leave the piece overlapping a block or outside the field.

use std::fmt;

use crate::grid::Grid;
use crate::piece::{rotate_with_kicks, Piece};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, BASE_DROP_MS, LINE_CLEAR_POINTS};

/// Clock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before the first start, or paused
    Idle,
    Running,
}

/// Last user-facing message, updated by lifecycle commands and board resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ready,
    Started,
    AlreadyRunning,
    Paused,
    AlreadyPaused,
    BoardReset,
    /// A new piece had no room; the board and counters were wiped
    BoardCleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Press Enter to start."),
            Status::Started => write!(f, "Game started. Take it slow."),
            Status::AlreadyRunning => write!(f, "Game already running."),
            Status::Paused => write!(f, "Paused. Press Enter to resume."),
            Status::AlreadyPaused => write!(f, "Game is already paused."),
            Status::BoardReset => write!(f, "Board reset. Press Enter to play again."),
            Status::BoardCleared => write!(f, "Board full, starting over. Keep practicing!"),
        }
    }
}

/// Emitted each time a piece settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// The following spawn collided and the board was wiped
    pub board_full: bool,
}

/// Result of a one-row drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    Locked(LockEvent),
}

/// Result of advancing the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    /// A frame should be drawn
    pub redraw: bool,
    /// Gravity moved or settled the piece this tick
    pub gravity: bool,
}

/// Complete Block Cascade state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Piece,
    rng: SimpleRng,
    phase: Phase,
    status: Status,
    score: u32,
    lines: u32,
    /// Time accumulated since the last gravity step
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    /// Interval restored by `start`
    base_drop_ms: u32,
    /// Monotonic id of the active piece (increments on every spawn)
    piece_id: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game with the given RNG seed and the default gravity
    pub fn new(seed: u32) -> Self {
        Self::with_drop_interval(seed, BASE_DROP_MS)
    }

    /// Create an idle game with a custom baseline gravity interval
    pub fn with_drop_interval(seed: u32, base_drop_ms: u32) -> Self {
        let base_drop_ms = base_drop_ms.max(1);
        let mut rng = SimpleRng::new(seed);
        let kind = rng.pick(&PieceKind::ALL);

        Self {
            grid: Grid::new(),
            active: Piece::spawn(kind),
            rng,
            phase: Phase::Idle,
            status: Status::Ready,
            score: 0,
            lines: 0,
            drop_counter_ms: 0,
            drop_interval_ms: base_drop_ms,
            base_drop_ms,
            piece_id: 1,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup (tests, the simulator).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Change the current gravity interval. `start` restores the baseline.
    pub fn set_drop_interval_ms(&mut self, ms: u32) {
        self.drop_interval_ms = ms.max(1);
    }

    pub fn base_drop_ms(&self) -> u32 {
        self.base_drop_ms
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    // ---------------------------------------------------------------------
    // Clock
    // ---------------------------------------------------------------------

    /// Idle -> Running. Restores the baseline gravity and zeroes the clock.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            self.status = Status::AlreadyRunning;
            return false;
        }
        self.phase = Phase::Running;
        self.drop_counter_ms = 0;
        self.drop_interval_ms = self.base_drop_ms;
        self.status = Status::Started;
        tracing::info!(seed = self.seed(), "cascade started");
        true
    }

    /// Running -> Idle
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            self.status = Status::AlreadyPaused;
            return false;
        }
        self.phase = Phase::Idle;
        self.status = Status::Paused;
        tracing::info!(score = self.score, lines = self.lines, "cascade paused");
        true
    }

    /// Any phase -> Idle with an empty board, zero counters and a fresh piece.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.phase = Phase::Idle;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.spawn_piece();
        self.status = Status::BoardReset;
        tracing::info!("cascade reset");
    }

    /// Advance the clock by `elapsed_ms`.
    ///
    /// While running, gravity fires once the accumulated time exceeds the
    /// drop interval, and every call asks for a redraw. While idle nothing
    /// changes.
    pub fn tick(&mut self, elapsed_ms: u32) -> Tick {
        if !self.is_running() {
            return Tick::default();
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        let gravity = self.drop_counter_ms > self.drop_interval_ms;
        if gravity {
            self.soft_drop();
        }

        Tick {
            redraw: true,
            gravity,
        }
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Shift the piece horizontally; rolled back on collision
    pub fn try_move(&mut self, dx: i8) -> bool {
        self.active.x += dx;
        if self.active.collides(&self.grid) {
            self.active.x -= dx;
            return false;
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1)
    }

    /// Rotate with wall kicks; fully reverted when no position fits
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        rotate_with_kicks(&mut self.active, &self.grid, clockwise)
    }

    /// Drop one row, or settle the piece if it cannot descend.
    ///
    /// Either way the gravity clock starts over.
    pub fn soft_drop(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0;
        self.active.y += 1;
        if !self.active.collides(&self.grid) {
            return DropOutcome::Moved;
        }
        self.active.y -= 1;
        DropOutcome::Locked(self.settle())
    }

    /// Merge the active piece, sweep complete rows, update counters and
    /// spawn the next piece.
    fn settle(&mut self) -> LockEvent {
        let piece = self.active;
        self.grid.merge(&piece.matrix, piece.x, piece.y);

        let cleared = self.grid.sweep().len() as u32;
        let points = cleared * LINE_CLEAR_POINTS;
        self.lines += cleared;
        self.score += points;
        tracing::debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            cleared,
            score = self.score,
            "piece settled"
        );

        let board_full = !self.spawn_piece();
        let event = LockEvent {
            lines_cleared: cleared,
            points,
            board_full,
        };
        self.last_event = Some(event);
        event
    }

    /// Spawn a uniformly random piece.
    ///
    /// Returns false when the spawn position was blocked; the board and
    /// counters are wiped in that case and the new piece stays in play.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.pick(&PieceKind::ALL);
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind, with the same board-full handling as
    /// [`GameState::spawn_piece`].
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        self.active = Piece::spawn(kind);
        self.piece_id = self.piece_id.wrapping_add(1);

        if !self.active.collides(&self.grid) {
            return true;
        }

        tracing::info!(
            score = self.score,
            lines = self.lines,
            "spawn blocked, clearing board"
        );
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.status = Status::BoardCleared;
        false
    }

    /// Apply a command. Returns true if anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.lines = self.lines;
        out.running = self.is_running();
        out.status = self.status;
        out.piece_id = self.piece_id;
        out.seed = self.seed();
        out.drop_interval_ms = self.drop_interval_ms;
    }

    /// Read-only copy for renderers
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
