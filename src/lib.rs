//! Side-scrolling arcade shooter on a fixed 512×480 canvas.
//!
//! All game rules live in this library; the binary only hosts them in a
//! terminal (input thread, pacing, half-block presentation).

pub mod canvas;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod resources;
pub mod spawner;
pub mod sprite;

pub use error::{GameError, Result};
