//! Terminal input module.
//!
//! Maps `crossterm` key events into arcade [`Command`]s for whichever tab is
//! visible. Nothing here holds state; the caller passes the active tab.

pub mod map;

pub use calm_arcade_types as types;

pub use map::{map_key, should_quit, Command, SolitaireCommand, TilesCommand};
