//! Arena-backed circular ring of players.
//!
//! The ring stores identifiers in a flat arena and links them through a
//! `next` index table. There are no owning pointers between elements, so
//! the cycle can never leak or dangle.

use super::elimination::Elimination;
use std::num::NonZeroUsize;
use tracing::{debug, instrument};

/// A circular, insertion-ordered sequence of identifiers.
///
/// Every live slot has exactly one successor. Following successors from
/// [`PlayerRing::head`] visits every element once and wraps back to the
/// head.
#[derive(Debug, Clone)]
pub struct PlayerRing<T> {
    pub(crate) slots: Vec<Option<T>>,
    pub(crate) next: Vec<usize>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) len: usize,
}

impl<T> PlayerRing<T> {
    /// Creates an empty ring.
    #[instrument]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty ring with room for `capacity` players.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Appends an identifier as the new last element.
    ///
    /// The new slot is spliced between the current tail and the head.
    #[instrument(skip(self, identifier), fields(len = self.len))]
    pub fn append(&mut self, identifier: T) {
        let slot = self.slots.len();
        self.slots.push(Some(identifier));

        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.next.push(head);
                self.next[tail] = slot;
            }
            _ => {
                // First element is its own successor.
                self.next.push(slot);
                self.head = Some(slot);
            }
        }

        self.tail = Some(slot);
        self.len += 1;
        debug!(slot, len = self.len, "Appended player to ring");
    }

    /// Number of identifiers in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ring holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the identifier at the head of the ring.
    pub fn head(&self) -> Option<&T> {
        self.head.and_then(|slot| self.slots[slot].as_ref())
    }

    /// Iterates the ring once, starting at the head, in successor order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Starts eliminating every `k`-th player, consuming the ring.
    ///
    /// The returned sequence is lazy: nothing is removed until it is
    /// stepped. An empty ring yields an already exhausted sequence.
    #[instrument(skip(self), fields(len = self.len))]
    pub fn begin_elimination(self, k: NonZeroUsize) -> Elimination<T> {
        debug!(k = k.get(), "Beginning elimination");
        Elimination::new(self, k)
    }
}

impl<T> Default for PlayerRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PlayerRing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for PlayerRing<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for identifier in iter {
            self.append(identifier);
        }
    }
}

impl<'a, T> IntoIterator for &'a PlayerRing<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over one lap of a [`PlayerRing`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    ring: &'a PlayerRing<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.cursor?;
        self.remaining -= 1;
        self.cursor = Some(self.ring.next[slot]);
        self.ring.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
