//! Step-at-a-time elimination over a [`PlayerRing`].
//!
//! An [`Elimination`] owns the ring it was started from and removes one
//! identifier per step. It is finite and cannot be restarted: once the
//! survivor has been produced the ring is empty and every later step
//! reports [`Step::Exhausted`].

use super::ring::PlayerRing;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use tracing::{debug, instrument, trace};

/// Result of a single elimination step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// A player was counted out. More than one player remains.
    Eliminated(T),
    /// The last remaining player. The sequence is now terminal.
    Survivor(T),
    /// The sequence has nothing left to produce.
    Exhausted,
}

impl<T> Step<T> {
    /// Returns the produced identifier, if any.
    pub fn into_inner(self) -> Option<T> {
        match self {
            Step::Eliminated(id) | Step::Survivor(id) => Some(id),
            Step::Exhausted => None,
        }
    }

    /// Returns true for [`Step::Exhausted`].
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }
}

/// Lifecycle of an elimination sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Steps remain to be taken.
    #[display("active")]
    Active,
    /// The survivor has been produced (or the ring was empty).
    #[display("terminal")]
    Terminal,
}

/// Traversal state: the counted position and the slot linking into it.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    current: usize,
    previous: usize,
}

/// Lazy elimination sequence produced by [`PlayerRing::begin_elimination`].
#[derive(Debug, Clone)]
pub struct Elimination<T> {
    ring: PlayerRing<T>,
    cursor: Option<Cursor>,
    k: NonZeroUsize,
    eliminated: usize,
}

impl<T> Elimination<T> {
    pub(crate) fn new(ring: PlayerRing<T>, k: NonZeroUsize) -> Self {
        let cursor = match (ring.head, ring.tail) {
            (Some(current), Some(previous)) => Some(Cursor { current, previous }),
            _ => None,
        };
        Self {
            ring,
            cursor,
            k,
            eliminated: 0,
        }
    }

    /// Takes one elimination step.
    ///
    /// Counting advances `k - 1` places from the current position and the
    /// player landed on is removed. When only one player is left it is
    /// returned as [`Step::Survivor`] and the ring is cleared.
    #[instrument(skip(self), fields(k = self.k.get(), remaining = self.ring.len))]
    pub fn step(&mut self) -> Step<T> {
        let Some(mut cursor) = self.cursor else {
            trace!("Elimination already exhausted");
            return Step::Exhausted;
        };

        if self.ring.next[cursor.current] == cursor.current {
            return self.finish(cursor.current);
        }

        // Every full lap returns to the same slot, so only the remainder counts.
        let advances = (self.k.get() - 1) % self.ring.len;
        for _ in 0..advances {
            cursor.previous = cursor.current;
            cursor.current = self.ring.next[cursor.current];
        }

        let victim = cursor.current;
        let next_survivor = self.ring.next[victim];

        self.ring.next[cursor.previous] = next_survivor;
        if self.ring.head == Some(victim) {
            self.ring.head = Some(next_survivor);
        }
        if self.ring.tail == Some(victim) {
            self.ring.tail = Some(cursor.previous);
        }
        self.ring.len -= 1;
        self.eliminated += 1;

        cursor.current = next_survivor;
        self.cursor = Some(cursor);

        debug!(
            slot = victim,
            remaining = self.ring.len,
            "Player eliminated"
        );

        match self.ring.slots[victim].take() {
            Some(id) => Step::Eliminated(id),
            None => Step::Exhausted,
        }
    }

    fn finish(&mut self, slot: usize) -> Step<T> {
        self.cursor = None;
        self.ring.head = None;
        self.ring.tail = None;
        self.ring.len = 0;
        debug!(slot, eliminated = self.eliminated, "Survivor reached");
        match self.ring.slots[slot].take() {
            Some(id) => Step::Survivor(id),
            None => Step::Exhausted,
        }
    }

    /// Identifiers not yet produced, survivor included.
    pub fn remaining(&self) -> usize {
        self.ring.len
    }

    /// Number of players eliminated so far, survivor excluded.
    pub fn eliminated(&self) -> usize {
        self.eliminated
    }

    /// The step count this sequence was started with.
    pub fn k(&self) -> NonZeroUsize {
        self.k
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.cursor.is_some() {
            Phase::Active
        } else {
            Phase::Terminal
        }
    }

    /// Players still seated, starting from the ring head.
    pub fn survivors(&self) -> impl Iterator<Item = &T> {
        self.ring.iter()
    }
}

impl<T> Iterator for Elimination<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().into_inner()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len, Some(self.ring.len))
    }
}

impl<T> ExactSizeIterator for Elimination<T> {}

impl<T> FusedIterator for Elimination<T> {}
