//! The search frontier: priority buckets with FIFO tie-breaking.

use std::collections::{BTreeMap, VecDeque};

use tilegraph_core::GridIndex;

/// An accumulated priority value, totally ordered via [`f32::total_cmp`].
///
/// Buckets are keyed by the *exact* priority value: two coordinates share a
/// bucket only when their accumulated priorities are bit-for-bit equal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Priority(pub(crate) f32);

impl Eq for Priority {}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered-but-not-yet-expanded coordinates, grouped by priority.
///
/// [`pop`](Frontier::pop) always takes the front of the lowest-priority
/// bucket, so coordinates discovered earlier at equal priority are expanded
/// first — stable, insertion-ordered tie-breaking.
#[derive(Default)]
pub(crate) struct Frontier {
    buckets: BTreeMap<Priority, VecDeque<GridIndex>>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `idx` to the FIFO bucket for exactly `priority`.
    pub(crate) fn push(&mut self, priority: f32, idx: GridIndex) {
        self.buckets
            .entry(Priority(priority))
            .or_default()
            .push_back(idx);
    }

    /// Remove and return the front of the lowest-priority bucket, along
    /// with that bucket's priority. Empties are pruned so the lowest
    /// remaining bucket is always non-empty.
    pub(crate) fn pop(&mut self) -> Option<(f32, GridIndex)> {
        let mut entry = self.buckets.first_entry()?;
        let priority = entry.key().0;
        // Buckets are never left empty, so the front exists.
        let idx = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        Some((priority, idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_bucket_first() {
        let mut f = Frontier::new();
        f.push(3.0, GridIndex::new(0, 0));
        f.push(1.0, GridIndex::new(1, 1));
        f.push(2.0, GridIndex::new(2, 2));
        assert_eq!(f.pop(), Some((1.0, GridIndex::new(1, 1))));
        assert_eq!(f.pop(), Some((2.0, GridIndex::new(2, 2))));
        assert_eq!(f.pop(), Some((3.0, GridIndex::new(0, 0))));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_priority_is_fifo() {
        let mut f = Frontier::new();
        f.push(1.5, GridIndex::new(0, 0));
        f.push(1.5, GridIndex::new(0, 1));
        f.push(1.5, GridIndex::new(0, 2));
        assert_eq!(f.pop(), Some((1.5, GridIndex::new(0, 0))));
        assert_eq!(f.pop(), Some((1.5, GridIndex::new(0, 1))));
        assert_eq!(f.pop(), Some((1.5, GridIndex::new(0, 2))));
    }

    #[test]
    fn interleaved_pushes_keep_bucket_order() {
        let mut f = Frontier::new();
        f.push(2.0, GridIndex::new(0, 0));
        f.push(1.0, GridIndex::new(1, 0));
        f.push(2.0, GridIndex::new(0, 1));
        assert_eq!(f.pop(), Some((1.0, GridIndex::new(1, 0))));
        // Both 2.0 entries remain in insertion order.
        assert_eq!(f.pop(), Some((2.0, GridIndex::new(0, 0))));
        assert_eq!(f.pop(), Some((2.0, GridIndex::new(0, 1))));
    }

    #[test]
    fn nearly_equal_priorities_are_distinct_buckets() {
        let mut f = Frontier::new();
        f.push(1.0 + f32::EPSILON, GridIndex::new(0, 0));
        f.push(1.0, GridIndex::new(1, 1));
        assert_eq!(f.pop(), Some((1.0, GridIndex::new(1, 1))));
    }
}
