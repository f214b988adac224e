//! Terminal front end for the arcade.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer of styled cells, and the renderer diffs consecutive frames to
//! write only what changed. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`layout`]: viewport and screen areas
//! - [`arcade_view`]: tab bar, active game, status and key help
//! - [`cascade_view`], [`tiles_view`], [`solitaire_view`]: one view per game
//! - [`redraw`]: frame pacing
//! - [`renderer`]: crossterm output

pub mod arcade_view;
pub mod cascade_view;
pub mod fb;
pub mod layout;
pub mod palette;
pub mod redraw;
pub mod renderer;
pub mod solitaire_view;
pub mod tiles_view;

pub use calm_arcade_core as core;
pub use calm_arcade_types as types;

pub use arcade_view::{key_help, ArcadeFrame, ArcadeView};
pub use cascade_view::CascadeView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{Area, Viewport};
pub use redraw::RedrawGate;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use solitaire_view::SolitaireView;
pub use tiles_view::TilesView;
