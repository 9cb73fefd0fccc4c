//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the engine, the input mapping
//! and the terminal view. Nothing here depends on I/O or randomness.
//!
//! # Board Geometry
//!
//! A board of side length `size` is stored as a flat, row-major sequence of
//! `size * size` tiles. Index `i` sits at row `i / size`, column `i % size`.
//! A tile value of `0` marks an empty cell; every other value is a power of two.
//!
//! # Spawning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_TILES` | 2 | Tiles placed on a fresh board |
//! | `SPAWN_TILES` | 1 | Tiles placed after a move that changed the board |
//! | `PROB_TWO_TILE` | 0.9 | Chance a spawned tile is a 2 (otherwise 4) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction};
//!
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Restart.direction(), None);
//! assert_eq!(Direction::Up.index(), 2);
//! ```

/// Default board side length.
pub const DEFAULT_SIZE: usize = 4;

/// Smallest playable board side length.
pub const MIN_SIZE: usize = 2;

/// Number of tiles placed by a reset.
pub const START_TILES: usize = 2;

/// Number of tiles placed after a move that changed the board.
pub const SPAWN_TILES: usize = 1;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const PROB_TWO_TILE: f64 = 0.9;

/// Largest tile accepted on a preset board; its double is the largest tile a
/// merge can produce.
pub const MAX_TILE: u64 = 1 << 62;

/// Minimum width of a rendered tile value, right-aligned.
pub const CELL_WIDTH: usize = 5;

/// The four slide directions.
///
/// Tiles slide (and merge) toward the named edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order traversal tables are laid out.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Stable table index for this direction.
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are produced by the key mapping and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward the left edge
    MoveLeft,
    /// Slide every tile toward the right edge
    MoveRight,
    /// Slide every tile toward the top edge
    MoveUp,
    /// Slide every tile toward the bottom edge
    MoveDown,
    /// Start a new game on the same board size
    Restart,
}

impl GameAction {
    /// The slide direction, if this action is a move.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }
}
