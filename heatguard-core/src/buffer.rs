//! Fixed-Capacity FIFO History Buffer
//!
//! ## Overview
//!
//! Every history in HeatGuard is bounded: raw and filtered samples per
//! channel, the risk window, the assessment log. All of them share the same
//! rule: when full, the *oldest* entry is evicted to make room for the new
//! one. [`CircularBuffer`] is that rule in one place.
//!
//! ## Design Rationale
//!
//! ### Why evict instead of reject?
//!
//! Sensor streams never pause to let a consumer catch up. Recent data is
//! what matters for both filtering diagnostics and trend classification, so
//! a full buffer silently drops its oldest entry rather than returning an
//! error like `heapless::Vec::push` would.
//!
//! ### Storage
//!
//! Backed by `heapless::Deque`, so the capacity is a compile-time constant
//! and nothing is allocated. Push is O(1) (one `pop_front` when full, one
//! `push_back`); iteration is oldest to newest.
//!
//! ```text
//! CircularBuffer<f64, 3> after pushing 1, 2, 3, 4:
//!
//!   front (oldest)           back (newest)
//!   ┌─────┬─────┬─────┐
//!   │ 2.0 │ 3.0 │ 4.0 │      1.0 was evicted
//!   └─────┴─────┴─────┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use heatguard_core::buffer::CircularBuffer;
//!
//! let mut window: CircularBuffer<f64, 3> = CircularBuffer::new();
//! for score in [10.0, 20.0, 30.0, 40.0] {
//!     window.push(score);
//! }
//!
//! let kept: Vec<f64> = window.iter().copied().collect();
//! assert_eq!(kept, vec![20.0, 30.0, 40.0]);
//! assert_eq!(window.last(), Some(&40.0));
//! ```
//!
//! ## Thread Safety
//!
//! Not synchronized. The risk crate keeps every buffer behind one lock.

use alloc::vec::Vec;

use heapless::Deque;

/// Bounded FIFO that evicts its oldest entry when full
///
/// ## Invariants
///
/// - `len() <= N` at all times
/// - iteration order is insertion order (oldest first)
#[derive(Clone)]
pub struct CircularBuffer<T, const N: usize> {
    items: Deque<T, N>,
}

impl<T, const N: usize> CircularBuffer<T, N> {
    /// Creates an empty buffer
    ///
    /// `const`, so a buffer can live in a `static`.
    pub const fn new() -> Self {
        Self { items: Deque::new() }
    }

    /// Appends an entry, returning the evicted oldest entry if the buffer
    /// was full
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.is_full() {
            self.items.pop_front()
        } else {
            None
        };

        // Cannot fail: one slot was freed above if we were full
        let _ = self.items.push_back(item);
        evicted
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maximum number of entries
    pub const fn capacity(&self) -> usize {
        N
    }

    /// True if nothing has been pushed (or after `clear`)
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once `N` entries are stored
    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Oldest entry still retained
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone, const N: usize> CircularBuffer<T, N> {
    /// Owned copy of the contents, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<const N: usize> CircularBuffer<f64, N> {
    /// Arithmetic mean of the stored values, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let sum: f64 = self.items.iter().sum();
        Some(sum / self.len() as f64)
    }
}

impl<T, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for CircularBuffer<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_buffer() {
        let buffer: CircularBuffer<f64, 5> = CircularBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.last().is_none());
        assert!(buffer.mean().is_none());
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = CircularBuffer::<f64, 5>::new();

        assert_eq!(buffer.push(25.0), None);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last(), Some(&25.0));
        assert_eq!(buffer.first(), Some(&25.0));
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = CircularBuffer::<u32, 3>::new();

        let evicted: Vec<Option<u32>> = (0..5).map(|i| buffer.push(i)).collect();

        assert_eq!(evicted, vec![None, None, None, Some(0), Some(1)]);
        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());
        assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn capacity_never_exceeded() {
        let mut buffer = CircularBuffer::<usize, 100>::new();
        for i in 0..1_000 {
            buffer.push(i);
            assert!(buffer.len() <= 100);
        }
        assert_eq!(buffer.first(), Some(&900));
        assert_eq!(buffer.last(), Some(&999));
    }

    #[test]
    fn mean_of_window() {
        let mut buffer = CircularBuffer::<f64, 4>::new();
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buffer.push(v);
        }
        // 2, 3, 4, 5
        assert_eq!(buffer.mean(), Some(3.5));
    }

    #[test]
    fn clear_resets() {
        let mut buffer = CircularBuffer::<f64, 2>::new();
        buffer.push(1.0);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
