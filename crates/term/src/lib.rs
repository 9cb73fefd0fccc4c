//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The board is
//! drawn into a plain framebuffer which is then flushed to the terminal,
//! redrawing only the runs of cells that changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be asserted cell by cell
//! - Own the raw-mode lifecycle in one place

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
