//! Closed-form answers for the counting-out problem.
//!
//! These helpers do not touch a ring. They are used to predict outcomes
//! and to cross-check the step-by-step elimination.

use super::ring::PlayerRing;
use std::num::NonZeroUsize;
use tracing::instrument;

/// Zero-based seat of the last player standing among `n` players when
/// every `k`-th player is counted out, starting from seat 0.
///
/// Uses the recurrence `J(1) = 0`, `J(m) = (J(m - 1) + k) mod m`.
/// Returns `None` when there are no players.
#[instrument]
pub fn survivor_position(n: usize, k: NonZeroUsize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let k = k.get();
    // Reducing k first keeps the sum below 2m.
    Some((2..=n).fold(0, |survivor, m| (survivor + k % m) % m))
}

/// Seats `0..n` in the order they leave the circle, survivor last.
#[instrument]
pub fn elimination_order(n: usize, k: NonZeroUsize) -> Vec<usize> {
    let ring: PlayerRing<usize> = (0..n).collect();
    ring.begin_elimination(k).collect()
}
