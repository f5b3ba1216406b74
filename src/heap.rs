//! Array-backed binary max-heap over `i64`.
//!
//! The element at index `i` has children at `2i + 1` and `2i + 2` and is never
//! smaller than either of them.

/// Value returned by the sentinel helpers when the heap is empty.
///
/// A heap may legitimately hold `-1`, so callers of
/// [`MaxHeap::peek_or_sentinel`] and [`MaxHeap::pop_or_sentinel`] must check
/// [`MaxHeap::is_empty`] first when their data can contain it.
pub const EMPTY_SENTINEL: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxHeap {
    data: Vec<i64>,
}

impl MaxHeap {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    pub fn peek_or_sentinel(&self) -> i64 {
        self.peek().unwrap_or(EMPTY_SENTINEL)
    }

    pub fn push(&mut self, value: i64) {
        self.data.push(value);
        let last = self.data.len() - 1;
        Self::sift_up(&mut self.data, last);
    }

    // An empty heap is left untouched.
    pub fn pop(&mut self) -> Option<i64> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.data[0], last);
        let end = self.data.len();
        Self::sift_down(&mut self.data, 0, end);
        Some(top)
    }

    pub fn pop_or_sentinel(&mut self) -> i64 {
        self.pop().unwrap_or(EMPTY_SENTINEL)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    fn sift_up(data: &mut [i64], start: usize) {
        let mut i = start;
        while i > 0 {
            let parent = (i - 1) / 2;
            if data[parent] >= data[i] {
                return;
            }
            data.swap(parent, i);
            i = parent;
        }
    }

    // Only a strictly larger child is swapped in; on equal children the left
    // one wins.
    fn sift_down(data: &mut [i64], start: usize, end: usize) {
        let mut i = start;
        while i < end {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < end && data[left] > data[largest] {
                largest = left;
            }
            if right < end && data[right] > data[largest] {
                largest = right;
            }
            if largest == i {
                return;
            }
            data.swap(largest, i);
            i = largest;
        }
    }
}
