//! Candidate library pool.
//!
//! Holds the libraries a run has not picked yet, as indices into
//! [`Problem::libraries`](crate::models::Problem::libraries). Removal is
//! O(1) by index or by slot (swap-remove with a position table).

/// Libraries still available for selection in one run.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    members: Vec<usize>,
    slots: Vec<Option<usize>>,
}

impl CandidatePool {
    /// Creates a pool containing libraries `0..count`.
    pub fn new(count: usize) -> Self {
        Self {
            members: (0..count).collect(),
            slots: (0..count).map(Some).collect(),
        }
    }

    /// Number of remaining candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no candidate remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether library `index` is still a candidate.
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Remaining candidates, in no particular order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.members
    }

    /// Removes library `index`. Returns `false` if it was already gone.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.slots.get(index).copied().flatten() {
            Some(slot) => {
                self.remove_slot(slot);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the candidate stored at `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= self.len()`.
    pub fn remove_slot(&mut self, slot: usize) -> usize {
        let index = self.members.swap_remove(slot);
        self.slots[index] = None;
        if let Some(&moved) = self.members.get(slot) {
            self.slots[moved] = Some(slot);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool() {
        let pool = CandidatePool::new(3);
        assert_eq!(pool.len(), 3);
        assert!(pool.contains(0) && pool.contains(2));
        assert!(!pool.contains(3));
    }

    #[test]
    fn test_remove_by_index() {
        let mut pool = CandidatePool::new(4);
        assert!(pool.remove(1));
        assert!(!pool.remove(1));
        assert!(!pool.contains(1));
        assert_eq!(pool.len(), 3);

        // Remaining entries stay addressable after the swap.
        assert!(pool.remove(3));
        assert!(pool.remove(0));
        assert!(pool.remove(2));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_remove_slot() {
        let mut pool = CandidatePool::new(3);
        let removed = pool.remove_slot(0);
        assert_eq!(removed, 0);
        assert!(!pool.contains(0));
        let mut rest = pool.as_slice().to_vec();
        rest.sort();
        assert_eq!(rest, vec![1, 2]);
    }

    #[test]
    fn test_empty_pool() {
        let mut pool = CandidatePool::new(0);
        assert!(pool.is_empty());
        assert!(!pool.remove(0));
    }
}
