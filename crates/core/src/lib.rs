//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and state management. It has **zero
//! dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same sampler script produces identical games
//! - **Testable**: every rule is reachable with preset boards
//! - **Portable**: runs in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: flat `size` x `size` tile grid and the strip slide/merge pass
//! - [`traversal`]: per-direction strip tables, computed once per board size
//! - [`empty`]: O(1) empty-cell set used for spawn sampling
//! - [`rng`]: the [`TileSampler`] seam plus seeded and scripted samplers
//! - [`game`]: the engine: moves, spawning, scoring, game-over detection
//! - [`snapshot`]: owned copy of the state for rendering
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; equal neighbours (ignoring
//!   gaps) merge pairwise from that edge inward, once per move
//! - Each merge adds the merged tile's value to the score
//! - A move that changed the board spawns one tile (2 at 90%, 4 otherwise)
//!   in a uniformly chosen empty cell; a fresh game starts with two
//! - The game ends when a spawn fills the board and the new tile has no
//!   equal orthogonal neighbour
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Game, ScriptedSampler};
//!
//! let tiles = vec![
//!     2, 2, 4, 4,
//!     0, 2, 0, 4,
//!     2, 0, 0, 0,
//!     2, 0, 2, 4,
//! ];
//! let mut game = Game::from_tiles(4, tiles, ScriptedSampler::new()).unwrap();
//!
//! assert!(game.move_left().unwrap());
//! assert_eq!(game.score(), 16);
//! assert_eq!(&game.board()[..2], &[4, 8]);
//! ```

pub mod board;
pub mod empty;
pub mod error;
pub mod game;
mod render;
pub mod rng;
pub mod snapshot;
pub mod traversal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use empty::EmptySet;
pub use error::GameError;
pub use game::Game;
pub use rng::{RngSampler, ScriptedSampler, TileSampler};
pub use snapshot::GameSnapshot;
pub use traversal::TraversalOrder;
