use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Snapshot of a point's weight at the time it was pushed.
#[derive(Debug, Clone, Copy)]
struct Entry {
    weight: f64,
    idx: usize,
    /// Version counter to detect stale entries.
    version: u32
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Heaviest first, on equal weight the lower index wins
        self.weight.total_cmp(&other.weight)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

/// Max-heap over point weights that supports lowering the weight of a
/// point that is still in the heap.
///
/// Lowering a weight pushes a fresh entry and bumps the version of the point,
/// older entries of that point are discarded when they surface.
pub struct WeightHeap {
    heap: BinaryHeap<Entry>,
    weights: Vec<f64>,
    versions: Vec<u32>,
    contained: Vec<bool>,
    len: usize
}

impl WeightHeap {
    pub fn new(weights: Vec<f64>) -> WeightHeap {
        let heap = weights.iter()
            .enumerate()
            .map(|(idx, &weight)| Entry { weight, idx, version: 0 })
            .collect();
        let len = weights.len();

        WeightHeap {
            heap,
            versions: vec![0; len],
            contained: vec![true; len],
            weights,
            len
        }
    }

    /// Amount of points that were not popped yet.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.contained[idx]
    }

    /// Current weight of the point, or the weight it had when it was popped.
    pub fn weight(&self, idx: usize) -> f64 {
        self.weights[idx]
    }

    /// Lowers the weight of a contained point by `amount`, never below zero.
    /// Popped points are ignored.
    pub fn decrease(&mut self, idx: usize, amount: f64) {
        if !self.contained[idx] {
            return;
        }

        let weight = (self.weights[idx] - amount).max(0.0);
        self.weights[idx] = weight;
        self.versions[idx] += 1;
        self.heap.push(Entry { weight, idx, version: self.versions[idx] });
    }

    /// Removes the point with the highest weight, preferring lower indices on ties.
    pub fn pop_max(&mut self) -> Option<(usize, f64)> {
        while let Some(entry) = self.heap.pop() {
            if !self.contained[entry.idx] || entry.version != self.versions[entry.idx] {
                continue;
            }

            self.contained[entry.idx] = false;
            self.len -= 1;
            return Some((entry.idx, entry.weight));
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pops_in_descending_order() {
        let mut heap = WeightHeap::new(vec![0.5, 3.0, 1.0, 2.0]);

        let order : Vec<usize> = (0..4)
            .map(|_| heap.pop_max().unwrap().0)
            .collect();

        assert_eq!(order, vec![1, 3, 2, 0]);
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn test_ties_prefer_lowest_index() {
        let mut heap = WeightHeap::new(vec![1.0, 2.0, 2.0, 1.0, 2.0]);

        assert_eq!(heap.pop_max(), Some((1, 2.0)));
        assert_eq!(heap.pop_max(), Some((2, 2.0)));
        assert_eq!(heap.pop_max(), Some((4, 2.0)));
        assert_eq!(heap.pop_max(), Some((0, 1.0)));
        assert_eq!(heap.pop_max(), Some((3, 1.0)));
    }

    #[test]
    fn test_decrease_reorders() {
        let mut heap = WeightHeap::new(vec![5.0, 4.0, 3.0]);

        heap.decrease(0, 2.5);
        assert_eq!(heap.weight(0), 2.5);
        heap.decrease(1, 0.5);

        assert_eq!(heap.pop_max(), Some((1, 3.5)));
        assert_eq!(heap.pop_max(), Some((2, 3.0)));
        assert_eq!(heap.pop_max(), Some((0, 2.5)));
    }

    #[test]
    fn test_decrease_clamps_and_ignores_popped() {
        let mut heap = WeightHeap::new(vec![1.0, 0.5]);

        assert_eq!(heap.pop_max(), Some((0, 1.0)));
        heap.decrease(0, 10.0);
        assert_eq!(heap.weight(0), 1.0, "Popped points keep their last weight");
        assert!(!heap.contains(0));

        heap.decrease(1, 10.0);
        assert_eq!(heap.weight(1), 0.0);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop_max(), Some((1, 0.0)));
    }
}
