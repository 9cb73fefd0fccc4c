//! Game module - the board engine
//!
//! Ties together the board, the empty-cell set, the traversal tables and the
//! tile sampler. Handles moves, spawning, scoring and game-over detection.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, trace};

use crate::board::Board;
use crate::empty::EmptySet;
use crate::error::{GameError, Result};
use crate::rng::{RngSampler, TileSampler};
use crate::snapshot::GameSnapshot;
use crate::traversal::TraversalOrder;
use crate::types::{
    Direction, GameAction, MAX_TILE, MIN_SIZE, PROB_TWO_TILE, SPAWN_TILES, START_TILES,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<S: TileSampler = RngSampler> {
    board: Board,
    /// Always exactly the zero-valued indices of `board`.
    empty: EmptySet,
    /// Derived from the size only; shared between clones.
    order: Arc<TraversalOrder>,
    score: u64,
    over: bool,
    sampler: S,
}

impl Game<RngSampler> {
    /// Create a game with an OS-seeded sampler.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_sampler(size, RngSampler::from_os_rng())
    }

    /// Create a reproducible game.
    pub fn seeded(size: usize, seed: u64) -> Result<Self> {
        Self::with_sampler(size, RngSampler::seeded(seed))
    }
}

impl<S: TileSampler> Game<S> {
    /// Create a game drawing from `sampler` and place the starting tiles.
    pub fn with_sampler(size: usize, sampler: S) -> Result<Self> {
        check_size(size)?;
        let mut game = Self {
            board: Board::new(size),
            empty: EmptySet::full(size * size),
            order: Arc::new(TraversalOrder::new(size)),
            score: 0,
            over: false,
            sampler,
        };
        game.reset();
        Ok(game)
    }

    /// Create a game from preset tiles (row-major, `size * size` long).
    ///
    /// Score starts at 0 and no tile is spawned. Every non-zero tile must be a
    /// power of two of at least 2 whose double still fits in a `u64`.
    pub fn from_tiles(size: usize, tiles: Vec<u64>, sampler: S) -> Result<Self> {
        check_size(size)?;
        if tiles.len() != size * size {
            return Err(GameError::InvalidArgument(format!(
                "expected {} tiles for size {}, got {}",
                size * size,
                size,
                tiles.len()
            )));
        }
        if let Some(bad) = tiles
            .iter()
            .find(|&&v| v != 0 && (v < 2 || v > MAX_TILE || !v.is_power_of_two()))
        {
            return Err(GameError::InvalidArgument(format!(
                "tile value {bad} is not a power of two in 2..={MAX_TILE}"
            )));
        }

        Ok(Self {
            empty: EmptySet::from_cells(&tiles),
            board: Board::from_cells(size, tiles),
            order: Arc::new(TraversalOrder::new(size)),
            score: 0,
            over: false,
            sampler,
        })
    }

    /// Start over: empty board, zero score, two fresh tiles.
    pub fn reset(&mut self) {
        self.score = 0;
        self.board.clear();
        self.empty = EmptySet::full(self.board.len());
        self.over = false;
        self.spawn(START_TILES);
        info!("new game on {0}x{0} board", self.size());
    }

    pub fn move_left(&mut self) -> Result<bool> {
        self.move_in(Direction::Left)
    }

    pub fn move_right(&mut self) -> Result<bool> {
        self.move_in(Direction::Right)
    }

    pub fn move_up(&mut self) -> Result<bool> {
        self.move_in(Direction::Up)
    }

    pub fn move_down(&mut self) -> Result<bool> {
        self.move_in(Direction::Down)
    }

    /// Slide and merge every strip toward `dir`.
    ///
    /// Returns whether any cell changed. A changing move refreshes the empty
    /// set and spawns one tile; a no-op move leaves the game untouched.
    pub fn move_in(&mut self, dir: Direction) -> Result<bool> {
        if self.over {
            return Err(GameError::InvalidOperation(
                "game is over; call reset to start a new game",
            ));
        }

        let mut changed = false;
        let mut gained = 0u64;
        for strip in self.order.strips(dir) {
            let (strip_changed, strip_gained) = self.board.combine_strip(strip);
            changed |= strip_changed;
            gained = gained.saturating_add(strip_gained);
        }
        self.score = self.score.saturating_add(gained);
        debug!("move {dir:?}: changed={changed} gained={gained}");

        if changed {
            self.empty.rescan(self.board.cells());
            self.spawn(SPAWN_TILES);
        }
        Ok(changed)
    }

    /// Apply a front-end action. `Restart` always reports a change.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool> {
        match action.direction() {
            Some(dir) => self.move_in(dir),
            None => {
                self.reset();
                Ok(true)
            }
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Row-major tile values, `0` for empty cells
    pub fn board(&self) -> &[u64] {
        self.board.cells()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The tracked set of empty indices.
    pub fn empty_cells(&self) -> &EmptySet {
        &self.empty
    }

    pub fn max_tile(&self) -> u64 {
        self.board.max_tile()
    }

    /// Owned copy of the renderable state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its tile buffer.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.size = self.size();
        snap.tiles.clear();
        snap.tiles.extend_from_slice(self.board.cells());
        snap.score = self.score;
        snap.game_over = self.over;
    }

    /// Place `count` tiles in distinct, uniformly chosen empty cells.
    fn spawn(&mut self, count: usize) {
        debug_assert!(self.empty.len() >= count);
        for _ in 0..count {
            let slot = self.sampler.pick(self.empty.len());
            let index = self.empty.take(slot);
            let value = if self.sampler.unit() < PROB_TWO_TILE { 2 } else { 4 };
            self.board.set(index, value);
            trace!("spawned {value} at {index}");
            self.check_over(index);
        }
    }

    /// Game-over check local to the tile just placed at `last`.
    ///
    /// Only a full board can end the game, and only if `last` has no
    /// equal-valued orthogonal neighbour.
    fn check_over(&mut self, last: usize) {
        if !self.empty.is_empty() {
            return;
        }
        let cells = self.board.cells();
        let value = cells[last];
        if self
            .board
            .neighbors(last)
            .iter()
            .any(|&n| cells[n] == value)
        {
            return;
        }
        self.over = true;
        info!("game over: score {} max tile {}", self.score, self.max_tile());
    }
}

impl<S: TileSampler> fmt::Display for Game<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_text(f, self.size(), self.board(), self.score, self.over)
    }
}

fn check_size(size: usize) -> Result<()> {
    if size < MIN_SIZE {
        return Err(GameError::InvalidArgument(format!(
            "board size must be at least {MIN_SIZE}, got {size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSampler;

    fn preset(size: usize, tiles: Vec<u64>) -> Game<ScriptedSampler> {
        Game::from_tiles(size, tiles, ScriptedSampler::new()).unwrap()
    }

    #[test]
    fn rejects_small_boards() {
        for size in [0, 1] {
            let err = Game::with_sampler(size, ScriptedSampler::new()).unwrap_err();
            assert!(matches!(err, GameError::InvalidArgument(_)));
        }
        assert!(Game::with_sampler(2, ScriptedSampler::new()).is_ok());
    }

    #[test]
    fn from_tiles_validates_input() {
        let short = Game::from_tiles(2, vec![0, 2, 4], ScriptedSampler::new());
        assert!(matches!(short, Err(GameError::InvalidArgument(_))));
        let odd = Game::from_tiles(2, vec![0, 2, 3, 0], ScriptedSampler::new());
        assert!(matches!(odd, Err(GameError::InvalidArgument(_))));
        let one = Game::from_tiles(2, vec![1, 0, 0, 0], ScriptedSampler::new());
        assert!(matches!(one, Err(GameError::InvalidArgument(_))));
        let huge = Game::from_tiles(2, vec![1 << 63, 0, 0, 0], ScriptedSampler::new());
        assert!(matches!(huge, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn largest_accepted_tiles_merge_without_wrapping() {
        let mut game = preset(2, vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert!(game.move_left().unwrap());
        // Index 1 was re-added to the empty set after 2 and 3, so the spawn
        // drawn from slot 0 lands on index 2.
        assert_eq!(game.board(), &[1 << 63, 0, 2, 0]);
        assert_eq!(game.score(), 1 << 63);
        assert_eq!(game.max_tile(), 1 << 63);
    }

    #[test]
    fn reset_places_two_start_tiles() {
        let sampler = ScriptedSampler::new().with_picks([0, 0]).with_units([0.5, 0.95]);
        let game = Game::with_sampler(4, sampler).unwrap();
        let tiles: Vec<u64> = game.board().iter().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.contains(&2));
        assert!(tiles.contains(&4));
        assert_eq!(game.score(), 0);
        assert!(!game.is_over());
        assert_eq!(game.empty_cells().len(), 14);
    }

    #[test]
    fn spawn_uses_sampled_slot_and_value() {
        // One empty cell left after the move: index 1.
        let sampler = ScriptedSampler::new().with_units([0.9]);
        let mut game = Game::from_tiles(2, vec![0, 2, 4, 8], sampler).unwrap();
        assert!(game.move_left().unwrap());
        assert_eq!(game.board(), &[2, 4, 4, 8]);
        assert!(game.empty_cells().is_empty());
        // Index 1 neighbours are 0 (2) and 3 (8). Index 2 is not adjacent.
        assert!(game.is_over());
    }

    #[test]
    fn full_board_with_matching_neighbour_continues() {
        let mut game = preset(2, vec![0, 2, 2, 8]);
        assert!(game.move_left().unwrap());
        // Row 0 became [2, 0]; the spawned 2 at index 1 matches index 0.
        assert_eq!(game.board(), &[2, 2, 2, 8]);
        assert!(!game.is_over());
    }

    #[test]
    fn move_after_game_over_is_rejected() {
        let mut game = preset(2, vec![0, 2, 4, 8]);
        game.move_left().unwrap();
        assert!(game.is_over());
        let err = game.move_up().unwrap_err();
        assert!(matches!(err, GameError::InvalidOperation(_)));

        game.reset();
        assert!(!game.is_over());
        assert!(game.move_in(Direction::Down).is_ok());
    }

    #[test]
    fn noop_move_changes_nothing() {
        let mut game = preset(2, vec![2, 4, 0, 0]);
        let before = game.empty_cells().to_sorted_vec();
        assert!(!game.move_left().unwrap());
        assert!(!game.move_up().unwrap());
        assert_eq!(game.board(), &[2, 4, 0, 0]);
        assert_eq!(game.score(), 0);
        assert_eq!(game.empty_cells().to_sorted_vec(), before);
    }

    #[test]
    fn restart_action_resets_score() {
        let mut game = preset(2, vec![2, 2, 0, 0]);
        game.apply_action(GameAction::MoveLeft).unwrap();
        assert_eq!(game.score(), 4);
        assert!(game.apply_action(GameAction::Restart).unwrap());
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().iter().filter(|&&v| v != 0).count(), 2);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let game = preset(2, vec![2, 0, 0, 4]);
        let snap = game.snapshot();
        assert_eq!(snap.size, 2);
        assert_eq!(snap.tiles, vec![2, 0, 0, 4]);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }
}
