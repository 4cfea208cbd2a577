//! Ranked ballots and collections of them.
//!
//! A [`Ballot`] is one voter's strict ranking and a [`BallotSet`] is the
//! whole election. Both are immutable once built; methods that need to
//! eliminate candidates work on copies made with `without`.

use std::{fmt::Debug, hash::Hash};

mod ballot;
pub use ballot::Ballot;
mod ballot_set;
pub use ballot_set::BallotSet;

/// Anything that can stand on a ballot.
///
/// Only identity matters, so this is implemented for every type that can be
/// cloned, compared and hashed.
pub trait Candidate: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Candidate for T {}
