//! Traversal module - per-direction strip tables
//!
//! A move in any direction is the same "slide toward the strip start" pass,
//! run over a direction-specific set of strips. Each strip lists `size` board
//! indices ordered so that its first element is the edge tiles slide toward.
//!
//! For a 4x4 board:
//!
//! ```text
//! left   (0, 1, 2, 3)    (4, 5, 6, 7)    ...
//! right  (3, 2, 1, 0)    (7, 6, 5, 4)    ...
//! up     (0, 4, 8, 12)   (1, 5, 9, 13)   ...
//! down   (12, 8, 4, 0)   (13, 9, 5, 1)   ...
//! ```

use crate::types::Direction;

/// Precomputed strips for all four directions of one board size.
///
/// Every table is a flat list of `size * size` indices; strip `k` of a
/// direction is the `k`-th chunk of `size` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOrder {
    size: usize,
    tables: [Vec<usize>; 4],
}

impl TraversalOrder {
    /// Build the tables for a board of side length `size`.
    pub fn new(size: usize) -> Self {
        // Row-major rows and column-major columns; the reversed directions
        // are the same strips read back to front.
        let left: Vec<usize> = (0..size * size).collect();
        let up: Vec<usize> = (0..size)
            .flat_map(|col| (0..size).map(move |row| row * size + col))
            .collect();
        let right = reverse_strips(&left, size);
        let down = reverse_strips(&up, size);

        let mut tables: [Vec<usize>; 4] = Default::default();
        tables[Direction::Left.index()] = left;
        tables[Direction::Right.index()] = right;
        tables[Direction::Up.index()] = up;
        tables[Direction::Down.index()] = down;

        Self { size, tables }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate the strips of `dir` in processing order.
    pub fn strips(&self, dir: Direction) -> impl Iterator<Item = &[usize]> + '_ {
        self.tables[dir.index()].chunks_exact(self.size)
    }
}

fn reverse_strips(table: &[usize], size: usize) -> Vec<usize> {
    table
        .chunks_exact(size)
        .flat_map(|strip| strip.iter().rev().copied())
        .collect()
}
