//! Board module - manages the tile grid
//!
//! The board is a `size` x `size` grid stored as a flat, row-major `Vec<u64>`.
//! A value of `0` is an empty cell; any other value is a tile (a power of two).
//! Coordinates: index `i` is at row `i / size`, column `i % size`.

use arrayvec::ArrayVec;

/// The game board - flat row-major tile storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u64>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Wrap existing tiles. `cells.len()` must be `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<u64>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major tile values
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Get tile at flat index, `None` if out of bounds
    pub fn get(&self, index: usize) -> Option<u64> {
        self.cells.get(index).copied()
    }

    /// Set tile at flat index
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, value: u64) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Orthogonal neighbours of `index` that exist on the board.
    ///
    /// Edges do not wrap: the last cell of a row has no right neighbour.
    pub fn neighbors(&self, index: usize) -> ArrayVec<usize, 4> {
        let size = self.size;
        let (row, col) = (index / size, index % size);
        let mut out = ArrayVec::new();
        if col != 0 {
            out.push(index - 1);
        }
        if col != size - 1 {
            out.push(index + 1);
        }
        if row != 0 {
            out.push(index - size);
        }
        if row != size - 1 {
            out.push(index + size);
        }
        out
    }

    /// Slide and merge one strip toward its first index.
    ///
    /// Returns whether any cell of the strip changed, and the score gained by
    /// merges (the sum of the merged tile values).
    pub fn combine_strip(&mut self, strip: &[usize]) -> (bool, u64) {
        combine_strip(&mut self.cells, strip)
    }
}

/// Single forward pass over `strip` that compacts non-zero tiles toward the
/// strip start and merges equal zero-omitted neighbours pairwise.
///
/// Cursors: `zero` is the next write slot, `start` the tile being placed and
/// `end` its next non-zero neighbour. Between iterations `zero <= start < end`,
/// and everything before `zero` is final, so a merged tile is never compared
/// again within the same pass.
pub(crate) fn combine_strip(cells: &mut [u64], strip: &[usize]) -> (bool, u64) {
    let len = strip.len();
    let mut changed = false;
    let mut gained = 0u64;
    let (mut start, mut zero, mut end) = (0usize, 0usize, 1usize);

    while start < len {
        if cells[strip[start]] == 0 {
            start += 1;
            end += 1;
            continue;
        }

        // Slide the tile down to the write slot.
        if zero != start {
            changed = true;
            cells[strip[zero]] = cells[strip[start]];
            cells[strip[start]] = 0;
            start = zero;
        }
        if cells[strip[zero]] != 0 {
            zero += 1;
        }

        while end < len && cells[strip[end]] == 0 {
            end += 1;
        }

        // A pair whose sum does not fit in a tile stays apart.
        if end < len && cells[strip[start]] == cells[strip[end]] {
            if let Some(merged) = cells[strip[start]].checked_mul(2) {
                changed = true;
                cells[strip[start]] = merged;
                gained = gained.saturating_add(merged);
                cells[strip[end]] = 0;
            }
        }

        start = end;
        end = start + 1;
    }

    (changed, gained)
}
