//! A small crate for finding the winner of an election from ranked ballots.
//!
//! Three counting rules are supported: first-past-the-post, Borda count and
//! instant-runoff voting. All of them run over an in-memory [`BallotSet`].
//!
//! Example usage:
//! ```
//! use ranked_tally::{BallotSet, Method, Outcome};
//!
//! let ballots = BallotSet::try_from(vec![
//!     vec![1, 3, 4, 2, 5],
//!     vec![2, 3, 4, 5, 1],
//!     vec![2, 4, 3, 1, 5],
//!     vec![1, 3, 4, 2, 5],
//! ])
//! .unwrap();
//!
//! assert_eq!(Method::Fptp.tally(&ballots), Outcome::Winner(1));
//! assert_eq!(Method::Borda.tally(&ballots), Outcome::Winner(3));
//! assert_eq!(Method::InstantRunoff.tally(&ballots), Outcome::NoWinner);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod error;
pub mod formats;
pub mod generators;
pub mod methods;

pub use error::{BallotError, ParseMethodError};
pub use formats::{Ballot, BallotSet, Candidate};
pub use methods::{Description, Method, Outcome};

/// Commonly used traits
pub mod prelude {
    pub use super::methods::VotingMethod;
}
