//! Circular player ring and counting-out elimination.
//!
//! Players are appended to a [`PlayerRing`] in seating order. Calling
//! [`PlayerRing::begin_elimination`] hands the ring to an [`Elimination`],
//! which removes one player per [`Elimination::step`] until a single
//! survivor is left.
//!
//! ```
//! use counting_out_ring::{PlayerRing, Step};
//! use std::num::NonZeroUsize;
//!
//! let ring: PlayerRing<_> = ["A", "B", "C"].into_iter().collect();
//! let mut game = ring.begin_elimination(NonZeroUsize::MIN);
//! assert_eq!(game.step(), Step::Eliminated("A"));
//! assert_eq!(game.step(), Step::Eliminated("B"));
//! assert_eq!(game.step(), Step::Survivor("C"));
//! assert_eq!(game.step(), Step::Exhausted);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod elimination;
pub mod josephus;
mod ring;

pub use elimination::{Elimination, Phase, Step};
pub use ring::{Iter, PlayerRing};
