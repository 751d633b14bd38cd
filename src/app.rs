//! Application model: the interface state that sits beside the player.
//!
//! The `App` struct holds the list cursor, the add-files prompt and the
//! transient status line used by the UI and runtime. Playback itself lives in
//! `player::Player`.

mod model;

pub use model::*;
