//! Player identifiers.

use serde::{Deserialize, Serialize};

/// A seated player, identified by their seat number around the circle.
///
/// Seats are numbered from zero in the order players were seated. The
/// seat number is also the lookup key a front end uses to find the
/// player's marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("Player {}", _0)]
#[serde(transparent)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates the identifier for the given seat.
    pub fn new(seat: usize) -> Self {
        Self(seat)
    }

    /// Returns the zero-based seat number.
    pub fn seat(self) -> usize {
        self.0
    }

    /// Formats the player with a custom label prefix.
    pub fn labeled(self, label: &str) -> String {
        format!("{} {}", label, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_seat_number() {
        assert_eq!(PlayerId::new(3).to_string(), "Player 3");
        assert_eq!(PlayerId::new(3).labeled("Seat"), "Seat 3");
    }

    #[test]
    fn test_serializes_as_bare_seat() {
        let json = serde_json::to_string(&PlayerId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
