use std::cmp::Ordering;


/// Element of an `IndexedPriorityQueue`
/// The queue writes the slot index whenever it moves the element,
/// and clears it once the element leaves the queue
pub trait QueueItem {
    /// Three-way priority comparison
    fn compare(&self, other: &Self) -> Ordering;

    /// Buffer slot the element currently occupies, if any
    fn queue_index(&self) -> Option<usize>;

    fn set_queue_index(&mut self, index: Option<usize>);
}


/// Which end of the ordering comes out first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapOrder {
    Ascending, // min-heap, smallest first
    Descending, // max-heap, largest first
}


/// Binary heap over a fixed-capacity buffer whose elements know their slot
///
/// Tracking the slot lets `contains` run in O(1) and lets `update` re-sort
/// an element in place after its priority changed, in O(log n), without
/// removing and reinserting it.
///
/// Heap property: every parent is not worse than either child under the
/// selected `HeapOrder`. Equal priorities never swap.
///
/// Running out of capacity is a soft failure: `try_enqueue` hands the item
/// back and the queue is untouched.
#[derive(Debug)]
pub struct IndexedPriorityQueue<T> {
    buffer: Vec<T>,
    capacity: usize,
    order: HeapOrder,
}

impl<T: QueueItem> IndexedPriorityQueue<T> {

    pub fn new(capacity: usize, order: HeapOrder) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Drop every element, wiping their slot indices first
    pub fn clear(&mut self) {
        for mut item in self.buffer.drain(..) {
            item.set_queue_index(None);
        }
    }

    /// True when `item` sits in the slot it records and that slot holds an equal element
    /// A stale copy of a dequeued element, or one from another queue, fails the check
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        item.queue_index()
            .and_then(|index| self.buffer.get(index))
            .is_some_and(|stored| stored == item)
    }

    /// Best element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.buffer.first()
    }

    /// Live elements in buffer order (not priority order)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Insert `item`, returning the slot it settled in
    /// The item comes back untouched if it is already queued or the queue is full
    pub fn try_enqueue(&mut self, mut item: T) -> Result<usize, T>
    where
        T: PartialEq,
    {
        if self.contains(&item) || self.buffer.len() == self.capacity {
            return Err(item);
        }

        let index = self.buffer.len();
        item.set_queue_index(Some(index));
        self.buffer.push(item);

        Ok(self.sift_up(index))
    }

    /// Remove and return the best element
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }

        // last element takes the root slot, then sinks
        let mut root = self.buffer.swap_remove(0);
        root.set_queue_index(None);

        if let Some(moved) = self.buffer.first_mut() {
            moved.set_queue_index(Some(0));
            self.sift_down(0);
        }

        Some(root)
    }

    /// First live element matching `predicate`, scanning the buffer linearly
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.buffer.iter().find(|item| predicate(item))
    }

    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.buffer.iter().any(predicate)
    }

    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.buffer.iter().all(predicate)
    }

    /// Change the element in `index` and restore heap order around it
    /// Tries to move it up first, and only if it stayed put, down.
    /// Returns the element's final slot, or None if `index` holds nothing.
    pub fn update<F>(&mut self, index: usize, change: F) -> Option<usize>
    where
        F: FnOnce(&mut T),
    {
        let item = self.buffer.get_mut(index)?;
        change(item);
        // the queue owns the slot index, whatever `change` did to it
        item.set_queue_index(Some(index));

        let moved = self.sift_up(index);
        if moved != index {
            return Some(moved);
        }
        Some(self.sift_down(index))
    }

    /// True if the element in slot `a` should come out strictly before the one in `b`
    fn is_better(&self, a: usize, b: usize) -> bool {
        let ordering = self.buffer[a].compare(&self.buffer[b]);
        match self.order {
            HeapOrder::Ascending => ordering == Ordering::Less,
            HeapOrder::Descending => ordering == Ordering::Greater,
        }
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.is_better(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.buffer.len();
        loop {
            let left = index * 2 + 1;
            if left >= len {
                break;
            }

            // right child wins only when strictly better than the left
            let right = left + 1;
            let child = if right < len && self.is_better(right, left) { right } else { left };

            if !self.is_better(child, index) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
        index
    }

    /// Exchange two slots along with their recorded indices
    fn swap(&mut self, a: usize, b: usize) {
        self.buffer.swap(a, b);
        self.buffer[a].set_queue_index(Some(a));
        self.buffer[b].set_queue_index(Some(b));
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

    /// Queue element for tests: equality by item, ordering by priority
    #[derive(Clone, Debug)]
    struct Entry {
        item: u32,
        priority: f32,
        index: Option<usize>,
    }

    impl Entry {
        fn new(item: u32, priority: f32) -> Self {
            Self { item, priority, index: None }
        }
    }

    impl PartialEq for Entry {
        fn eq(&self, other: &Self) -> bool {
            self.item == other.item
        }
    }

    impl QueueItem for Entry {
        fn compare(&self, other: &Self) -> Ordering {
            self.priority.total_cmp(&other.priority)
        }
        fn queue_index(&self) -> Option<usize> {
            self.index
        }
        fn set_queue_index(&mut self, index: Option<usize>) {
            self.index = index;
        }
    }

    /// Every parent is not worse than its children
    fn assert_heap(queue: &IndexedPriorityQueue<Entry>) {
        let items: Vec<&Entry> = queue.iter().collect();
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.index, Some(i), "slot index out of sync for {item:?}");
            for child in [2 * i + 1, 2 * i + 2] {
                if child < items.len() {
                    assert!(!queue.is_better(child, i), "heap broken at {i} -> {child}");
                }
            }
        }
    }

    #[test]
    fn test_new_queue() {
        let mut queue: IndexedPriorityQueue<Entry> = IndexedPriorityQueue::new(8, HeapOrder::Descending);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue.order(), HeapOrder::Descending);
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());

        assert!(queue.try_dequeue().is_none());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_enqueue_until_full_then_dequeue_max_first() {
        let mut queue = IndexedPriorityQueue::new(8, HeapOrder::Descending);

        for i in 0..8 {
            let entry = Entry::new(i, i as f32);
            assert!(!queue.contains(&entry));
            assert!(queue.try_enqueue(entry).is_ok());
            assert_eq!(queue.len(), i as usize + 1);

            // Re-read the stored copy, it carries the live slot
            let stored = queue.find(|e| e.item == i).unwrap().clone();
            assert!(queue.contains(&stored));
            assert_heap(&queue);
        }

        // Full queue hands the item back
        let rejected = queue.try_enqueue(Entry::new(8, 8.0)).unwrap_err();
        assert_eq!(rejected.item, 8);
        assert_eq!(rejected.index, None);
        assert_eq!(queue.len(), queue.capacity());

        for i in (0..8).rev() {
            let entry = queue.try_dequeue().unwrap();
            assert_eq!(entry.item, i);
            assert_eq!(queue.len(), i as usize);
            assert!(!queue.contains(&entry));
            assert_heap(&queue);
        }
        assert!(queue.try_dequeue().is_none());
    }

    #[test]
    fn test_ascending_order() {
        let mut queue = IndexedPriorityQueue::new(5, HeapOrder::Ascending);
        for (item, priority) in [(1, 4.0), (2, 1.0), (3, 5.0), (4, 2.0), (5, 3.0)] {
            queue.try_enqueue(Entry::new(item, priority)).unwrap();
        }
        assert_eq!(queue.peek().map(|e| e.item), Some(2));

        let order: Vec<u32> = std::iter::from_fn(|| queue.try_dequeue()).map(|e| e.item).collect();
        assert_eq!(order, vec![2, 4, 5, 1, 3]);
    }

    #[test]
    fn test_enqueue_rejects_queued_item() {
        let mut queue = IndexedPriorityQueue::new(4, HeapOrder::Ascending);
        queue.try_enqueue(Entry::new(1, 1.0)).unwrap();
        queue.try_enqueue(Entry::new(2, 2.0)).unwrap();

        let copy = queue.find(|e| e.item == 2).unwrap().clone();
        assert!(queue.try_enqueue(copy).is_err());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_contains_rejects_stale_index() {
        let mut queue = IndexedPriorityQueue::new(4, HeapOrder::Ascending);
        queue.try_enqueue(Entry::new(1, 1.0)).unwrap();
        queue.try_enqueue(Entry::new(2, 2.0)).unwrap();

        // Claims slot 0, but slot 0 holds item 1
        let mut forged = Entry::new(2, 2.0);
        forged.index = Some(0);
        assert!(!queue.contains(&forged));

        // Slot past the live range
        forged.index = Some(3);
        assert!(!queue.contains(&forged));
    }

    #[test]
    fn test_clear() {
        let mut queue = IndexedPriorityQueue::new(4, HeapOrder::Ascending);
        for i in 0..4 {
            queue.try_enqueue(Entry::new(i, i as f32)).unwrap();
        }
        let stored = queue.peek().unwrap().clone();

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.contains(&stored));
        assert!(queue.try_enqueue(Entry::new(9, 0.0)).is_ok());
    }

    #[test]
    fn test_find_any_all() {
        let mut queue = IndexedPriorityQueue::new(4, HeapOrder::Ascending);
        for (item, priority) in [(1, 3.0), (2, 1.0), (3, 2.0)] {
            queue.try_enqueue(Entry::new(item, priority)).unwrap();
        }

        assert_eq!(queue.find(|e| e.item == 3).map(|e| e.priority), Some(2.0));
        assert!(queue.find(|e| e.item == 7).is_none());
        assert!(queue.any(|e| e.priority > 2.5));
        assert!(!queue.any(|e| e.priority > 3.5));
        assert!(queue.all(|e| e.priority >= 1.0));
        assert!(!queue.all(|e| e.priority >= 2.0));
    }

    #[test]
    fn test_update_moves_up_and_down() {
        let mut queue = IndexedPriorityQueue::new(8, HeapOrder::Ascending);
        for i in 0..6 {
            queue.try_enqueue(Entry::new(i, i as f32 + 1.0)).unwrap();
        }

        // decrease-key: item 5 jumps to the root
        let slot = queue.find(|e| e.item == 5).and_then(|e| e.index).unwrap();
        assert_eq!(queue.update(slot, |e| e.priority = 0.5), Some(0));
        assert_eq!(queue.peek().map(|e| e.item), Some(5));
        assert_heap(&queue);

        // increase-key: the root sinks
        assert_ne!(queue.update(0, |e| e.priority = 10.0), Some(0));
        assert_eq!(queue.peek().map(|e| e.item), Some(0));
        assert_heap(&queue);

        // dead slot
        assert_eq!(queue.update(6, |e| e.priority = 0.0), None);

        let order: Vec<u32> = std::iter::from_fn(|| queue.try_dequeue()).map(|e| e.item).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_equal_priorities_do_not_swap() {
        let mut queue = IndexedPriorityQueue::new(3, HeapOrder::Ascending);
        for i in 0..3 {
            queue.try_enqueue(Entry::new(i, 1.0)).unwrap();
        }
        let slots: Vec<u32> = queue.iter().map(|e| e.item).collect();
        assert_eq!(slots, vec![0, 1, 2]);
        assert_eq!(queue.try_dequeue().map(|e| e.item), Some(0));
    }

    #[test]
    fn test_random_round_trip_is_sorted() {
        let mut rng = StdRng::seed_from_u64(7);

        for order in [HeapOrder::Ascending, HeapOrder::Descending] {
            for _ in 0..50 {
                let n = rng.random_range(1..64);
                let mut queue = IndexedPriorityQueue::new(n, order);
                let mut items: Vec<u32> = (0..n as u32).collect();
                items.shuffle(&mut rng);

                for item in items {
                    let priority = rng.random_range(0..20) as f32;
                    queue.try_enqueue(Entry::new(item, priority)).unwrap();
                }
                assert_heap(&queue);

                // random decrease/increase-key operations keep the heap valid
                for _ in 0..n {
                    let slot = rng.random_range(0..n);
                    let priority = rng.random_range(0..20) as f32;
                    let settled = queue.update(slot, |e| e.priority = priority).unwrap();
                    assert_eq!(queue.iter().nth(settled).map(|e| e.priority), Some(priority));
                    assert_heap(&queue);
                }

                let mut previous: Option<f32> = None;
                while let Some(entry) = queue.try_dequeue() {
                    assert!(!queue.contains(&entry));
                    if let Some(p) = previous {
                        match order {
                            HeapOrder::Ascending => assert!(p <= entry.priority),
                            HeapOrder::Descending => assert!(p >= entry.priority),
                        }
                    }
                    previous = Some(entry.priority);
                    assert_heap(&queue);
                }
            }
        }
    }
}
