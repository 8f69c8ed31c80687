//! A min-priority frontier for cost-ordered search.

use super::super::interface::Cost;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// BinaryHeap is a max-heap, so the ordering is reversed: lower priority pops
// first, and among equal priorities the earlier insertion pops first.
struct Entry<T> {
    priority: Cost,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pops items in order of increasing priority.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
    high_water: usize,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        PriorityFrontier { heap: BinaryHeap::new(), next_seq: 0, high_water: 0 }
    }

    pub fn push(&mut self, item: T, priority: Cost) {
        debug_assert!(!priority.is_nan());
        self.heap.push(Entry { priority, seq: self.next_seq, item });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the item with the lowest priority.
    pub fn pop(&mut self) -> Option<(T, Cost)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("b", 10.0);
        frontier.push("a", 5.0);
        frontier.push("c", 15.0);
        assert_eq!(frontier.pop(), Some(("a", 5.0)));
        assert_eq!(frontier.pop(), Some(("b", 10.0)));
        assert_eq!(frontier.pop(), Some(("c", 15.0)));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for i in 0..5 {
            frontier.push(i, 1.0);
        }
        let order: Vec<i32> = std::iter::from_fn(|| frontier.pop().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(0, 1.0);
        frontier.push(1, 2.0);
        frontier.push(2, 3.0);
        let _ = frontier.pop();
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.high_water(), 3);
    }
}
