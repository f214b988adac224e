//! Calm Arcade (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces shared
//! by both binaries: configuration, logging setup, the [`app::App`]
//! controller and the JSON observation used by `cascade-sim`.

pub mod app;
pub mod config;
pub mod logging;
pub mod observe;

pub use calm_arcade_core as core;
pub use calm_arcade_input as input;
pub use calm_arcade_term as term;
pub use calm_arcade_types as types;
