//! Empty-cell bookkeeping.
//!
//! Indexed set over `0..capacity`: a dense slot list for uniform sampling plus
//! a reverse lookup so insert, remove and take are all O(1).

/// Set of board indices currently holding `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySet {
    slots: Vec<usize>,
    slot_of: Vec<Option<usize>>,
}

impl EmptySet {
    /// Every index in `0..capacity` is empty.
    pub fn full(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).collect(),
            slot_of: (0..capacity).map(Some).collect(),
        }
    }

    /// Exactly the zero-valued indices of `cells`.
    pub fn from_cells(cells: &[u64]) -> Self {
        let mut set = Self {
            slots: Vec::with_capacity(cells.len()),
            slot_of: vec![None; cells.len()],
        };
        set.rescan(cells);
        set
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        matches!(self.slot_of.get(index), Some(Some(_)))
    }

    /// Returns false if `index` was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        self.slot_of[index] = Some(self.slots.len());
        self.slots.push(index);
        true
    }

    /// Returns false if `index` was not present.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.slot_of.get(index).copied().flatten() {
            Some(slot) => {
                self.take(slot);
                true
            }
            None => false,
        }
    }

    /// Remove and return the index stored at `slot` (`slot < len()`).
    pub fn take(&mut self, slot: usize) -> usize {
        let index = self.slots.swap_remove(slot);
        self.slot_of[index] = None;
        if let Some(&moved) = self.slots.get(slot) {
            self.slot_of[moved] = Some(slot);
        }
        index
    }

    /// Reconcile with a full scan of `cells`: zeros are added, tracked
    /// indices that now hold a tile are dropped.
    pub fn rescan(&mut self, cells: &[u64]) {
        for (index, &value) in cells.iter().enumerate() {
            if value == 0 {
                self.insert(index);
            } else {
                self.remove(index);
            }
        }
    }

    /// Sorted copy of the tracked indices.
    pub fn to_sorted_vec(&self) -> Vec<usize> {
        let mut out = self.slots.clone();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_tracks_every_index() {
        let set = EmptySet::full(4);
        assert_eq!(set.len(), 4);
        assert!((0..4).all(|i| set.contains(i)));
        assert!(!set.contains(4));
    }

    #[test]
    fn take_keeps_reverse_lookup_consistent() {
        let mut set = EmptySet::full(5);
        assert_eq!(set.take(1), 1);
        // Last slot (index 4) was swapped into slot 1.
        assert!(set.contains(4));
        assert!(set.remove(4));
        assert!(!set.remove(4));
        assert_eq!(set.to_sorted_vec(), vec![0, 2, 3]);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = EmptySet::from_cells(&[2, 2, 2]);
        assert!(set.is_empty());
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rescan_matches_zero_cells() {
        let mut set = EmptySet::from_cells(&[0, 2, 0, 4]);
        assert_eq!(set.to_sorted_vec(), vec![0, 2]);
        set.rescan(&[2, 0, 0, 4]);
        assert_eq!(set.to_sorted_vec(), vec![1, 2]);
    }
}
