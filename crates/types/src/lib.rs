//! Shared types and constants for the arcade.
//!
//! Everything here is plain data with no dependencies, usable from the game
//! logic, the input mapping and the terminal views alike.
//!
//! # Grid Dimensions
//!
//! Block Cascade plays on a fixed field:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Baseline gravity interval restored on start |
//! | `MISMATCH_FLASH_MS` | 600 | How long a wrong tile pair stays highlighted |
//!
//! # Examples
//!
//! ```
//! use calm_arcade_types::{GameAction, PieceKind, Tab, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("o"), Some(PieceKind::O));
//! assert_eq!(PieceKind::O.color(), 2);
//!
//! assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
//! assert_eq!(Tab::Tiles.next(), Tab::Solitaire);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Frame interval of the interactive loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Baseline gravity interval (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Points awarded for every cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Largest valid color index stored in a grid cell
pub const MAX_COLOR: u8 = 7;

/// Highlight duration for a mismatched tile pair
pub const MISMATCH_FLASH_MS: u32 = 600;

/// A grid cell: 0 is empty, 1-7 is a settled block of that color.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY: Cell = 0;


/// The seven piece kinds
///
/// Each kind owns one color index used for both the falling piece and the
/// blocks it leaves behind:
/// - **T**: 1
/// - **O**: 2
/// - **L**: 3
/// - **J**: 4
/// - **I**: 5
/// - **S**: 6
/// - **Z**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Spawn table; a uniform index into it picks the next piece.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Color index written into the grid for this kind
    pub fn color(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Reverse of [`PieceKind::color`]
    pub fn from_color(color: Cell) -> Option<Self> {
        match color {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use calm_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Orientation of the active piece, counted in quarter turns from spawn.
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use calm_arcade_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Commands accepted by the Block Cascade engine
///
/// Movement and rotation come from the player; `Start`, `Pause` and `Reset`
/// drive the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row; settles it when it cannot descend
    SoftDrop,
    /// Rotate piece 90° clockwise (with wall kicks)
    RotateCw,
    /// Rotate piece 90° counter-clockwise (with wall kicks)
    RotateCcw,
    /// Start the gravity clock
    Start,
    /// Stop the gravity clock
    Pause,
    /// Clear the board and counters and return to idle
    Reset,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use calm_arcade_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "softdrop" | "down" => Some(GameAction::SoftDrop),
            "rotate" | "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "start" => Some(GameAction::Start),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Start => "start",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}

/// Tabs of the navigation shell, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Tiles,
    Solitaire,
    Cascade,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Tiles, Tab::Solitaire, Tab::Cascade];

    pub fn index(&self) -> usize {
        match self {
            Tab::Tiles => 0,
            Tab::Solitaire => 1,
            Tab::Cascade => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Title shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Tiles => "Tile Match",
            Tab::Solitaire => "Relaxed Solitaire",
            Tab::Cascade => "Block Cascade",
        }
    }

    /// Parse from a short name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tiles" | "match" | "mahjong" => Some(Tab::Tiles),
            "solitaire" | "cards" => Some(Tab::Solitaire),
            "cascade" | "blocks" => Some(Tab::Cascade),
            _ => None,
        }
    }
}

/// Card suits, in foundation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn index(&self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}
