use std::fmt::Debug;

use thiserror::Error;

/// A ballot that could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallotError<C: Debug> {
    #[error("candidate {candidate:?} ranked twice, at positions {first} and {second}")]
    DuplicateCandidate { candidate: C, first: usize, second: usize },
    /// Same as `DuplicateCandidate`, but found while building a whole
    /// [`BallotSet`](crate::BallotSet). `index` is the offending ballot.
    #[error("ballot {index} ranks candidate {candidate:?} twice, at positions {first} and {second}")]
    InBallot { index: usize, candidate: C, first: usize, second: usize },
}

impl<C: Debug> BallotError<C> {
    pub(crate) fn in_ballot(self, index: usize) -> Self {
        match self {
            BallotError::DuplicateCandidate { candidate, first, second }
            | BallotError::InBallot { candidate, first, second, .. } => {
                BallotError::InBallot { index, candidate, first, second }
            }
        }
    }
}

/// The name did not match any counting method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown voting method `{0}`")]
pub struct ParseMethodError(pub String);
