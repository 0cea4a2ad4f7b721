/*!
# Indexed Min-Priority-Queue

A binary min-heap over the elements `0..n` that additionally tracks the heap position of every
element. This enables
- `O(1)` membership tests and priority lookups,
- `O(log n)` insertion, removal of the minimum and (decrease- or increase-) key updates.

Used by Dijkstra's and Prim's algorithm, where every vertex position is an element.
*/

const NOT_QUEUED: usize = usize::MAX;

/// Min-priority-queue over the elements `0..n` supporting key updates
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P> {
    /// Heap of `(priority, element)` pairs
    heap: Vec<(P, usize)>,
    /// `positions[e]` is the heap slot of element `e` or `NOT_QUEUED`
    positions: Vec<usize>,
}

impl<P> IndexedMinHeap<P>
where
    P: Copy + Ord,
{
    /// Creates an empty queue for elements `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            heap: Vec::new(),
            positions: vec![NOT_QUEUED; n],
        }
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns *true* if no element is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns *true* if `element` is currently queued.
    /// ** Panics if `element >= n` **
    pub fn contains(&self, element: usize) -> bool {
        self.positions[element] != NOT_QUEUED
    }

    /// Returns the priority of `element` if it is queued.
    /// ** Panics if `element >= n` **
    pub fn priority(&self, element: usize) -> Option<P> {
        match self.positions[element] {
            NOT_QUEUED => None,
            slot => Some(self.heap[slot].0),
        }
    }

    /// Inserts `element` with `priority` or updates its priority if already queued.
    /// ** Panics if `element >= n` **
    pub fn set(&mut self, element: usize, priority: P) {
        let slot = match self.positions[element] {
            NOT_QUEUED => {
                self.heap.push((priority, element));
                self.positions[element] = self.heap.len() - 1;
                self.heap.len() - 1
            }
            slot => {
                self.heap[slot].0 = priority;
                slot
            }
        };

        let slot = self.sift_up(slot);
        self.sift_down(slot);
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.first().map(|&(p, e)| (e, p))
    }

    /// Removes and returns the element with the smallest priority together with its priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, element) = self.heap.pop()?;
        self.positions[element] = NOT_QUEUED;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((element, priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].1] = a;
        self.positions[self.heap[b].1] = b;
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].0 <= self.heap[slot].0 {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                return;
            }

            let right = left + 1;
            let smallest = if right < self.heap.len() && self.heap[right].0 < self.heap[left].0 {
                right
            } else {
                left
            };

            if self.heap[slot].0 <= self.heap[smallest].0 {
                return;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn pops_in_priority_order() {
        let mut queue = IndexedMinHeap::new(5);
        queue.set(0, 5);
        queue.set(1, 3);
        queue.set(2, 4);
        queue.set(3, 1);

        assert_eq!(queue.len(), 4);
        assert!(queue.contains(3));
        assert!(!queue.contains(4));
        assert_eq!(queue.priority(2), Some(4));
        assert_eq!(queue.priority(4), None);
        assert_eq!(queue.peek(), Some((3, 1)));

        assert_eq!(queue.pop(), Some((3, 1)));
        assert_eq!(queue.pop(), Some((1, 3)));
        assert_eq!(queue.pop(), Some((2, 4)));
        assert_eq!(queue.pop(), Some((0, 5)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn key_updates() {
        let mut queue = IndexedMinHeap::new(4);
        for e in 0..4 {
            queue.set(e, 10 + e as i64);
        }

        queue.set(3, 0); // decrease
        queue.set(0, 20); // increase

        assert_eq!(queue.pop(), Some((3, 0)));
        assert_eq!(queue.pop(), Some((1, 11)));
        assert!(!queue.contains(1));

        queue.set(1, 1); // re-insert
        assert_eq!(queue.pop(), Some((1, 1)));
        assert_eq!(queue.pop(), Some((2, 12)));
        assert_eq!(queue.pop(), Some((0, 20)));
    }

    #[test]
    fn random_against_sorting() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for n in [1usize, 10, 100] {
            let mut queue = IndexedMinHeap::new(n);
            let mut expected = vec![None; n];

            for _ in 0..3 * n {
                let e = rng.random_range(0..n);
                let p: i32 = rng.random_range(-100..100);
                queue.set(e, p);
                expected[e] = Some(p);
            }

            let mut expected: Vec<_> = expected
                .into_iter()
                .enumerate()
                .filter_map(|(e, p)| p.map(|p| (p, e)))
                .collect();
            expected.sort_unstable();

            let mut popped = Vec::new();
            while let Some((e, p)) = queue.pop() {
                popped.push((p, e));
            }

            assert_eq!(popped.len(), expected.len());
            assert!(popped.windows(2).all(|w| w[0].0 <= w[1].0));

            popped.sort_unstable();
            assert_eq!(popped, expected);
        }
    }
}
