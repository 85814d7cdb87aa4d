//! Grid snake for the terminal.
//!
//! The simulation lives in [`game`]: an explicit [`game::GameState`] struct
//! advanced one step at a time by [`game::GameState::tick`]. [`term`] is the
//! drawing surface, [`input`] maps key events to commands, and [`app`] ties
//! everything together in a synchronous tick loop.

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod snake;
pub mod term;

/// Signed so that out-of-bounds positions stay representable for wall checks.
pub type GridInt = i16;

/// One grid-aligned unit square, `(x, y)` with both axes in `[0, grid_size)`.
pub type Cell = (GridInt, GridInt);
