use std::fmt;

/// Owned, renderable copy of the game state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tile values, `0` for empty cells.
    pub tiles: Vec<u64>,
    pub score: u64,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Tile at `(row, col)`, `None` if out of bounds.
    pub fn tile(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.tiles.get(row * self.size + col).copied()
    }

    pub fn max_tile(&self) -> u64 {
        self.tiles.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_text(f, self.size, &self.tiles, self.score, self.game_over)
    }
}
