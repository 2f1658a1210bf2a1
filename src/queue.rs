//! Unbounded blocking FIFO.
//!
//! One [Mutex] guards the whole sequence, one [Condvar] parks readers while
//! it is empty. Every look at the contents - including the emptiness check
//! that precedes a pop - happens under the lock.
//!
//! Intended for a single writer and several readers, but nothing breaks
//! with more writers: each push is atomic on its own.

use std::collections::VecDeque;
use branch_hints::unlikely;
use parking_lot::{Condvar, Mutex};

pub struct Queue<T> {
    items: Mutex<VecDeque<T>>,
    not_empty: Condvar,
    /// Readers currently inside `not_empty.wait`.
    #[cfg(test)]
    parked: std::sync::atomic::AtomicUsize,
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
            #[cfg(test)]
            parked: Default::default(),
        }
    }
}

impl<T> Queue<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail and wake one blocked reader.
    ///
    /// Only one item was added, so only one reader can make progress.
    /// Which one is woken is up to the OS.
    #[inline]
    pub fn push(&self, value: T) {
        let mut items = self.items.lock();
        items.push_back(value);
        self.not_empty.notify_one();
    }

    /// Append all `values` under a single lock, then wake every blocked reader.
    ///
    /// Returns number of pushed values.
    pub fn push_burst<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = T>
    {
        let mut items = self.items.lock();
        let before = items.len();
        items.extend(values);
        let pushed = items.len() - before;
        self.not_empty.notify_all();
        pushed
    }

    /// Remove and return the head, parking the caller while the queue is empty.
    ///
    /// Check and removal happen under the same lock acquisition.
    /// Condition is re-checked after each wake - a wake may be spurious,
    /// or another reader may have taken the item first.
    pub fn pop_blocking(&self) -> T {
        let mut items = self.items.lock();
        loop {
            if let Some(value) = items.pop_front() {
                return value;
            }
            tracing::info!("went to sleep");
            #[cfg(test)]
            self.parked.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.not_empty.wait(&mut items);
            #[cfg(test)]
            self.parked.fetch_sub(1, std::sync::atomic::Ordering::SeqCst);
            tracing::info!("woke up");
            if unlikely(items.is_empty()) {
                tracing::debug!("woke up to an empty queue");
            }
        }
    }

    /// Non-blocking pop.
    #[inline]
    pub fn try_pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}
