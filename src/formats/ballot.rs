use std::collections::{HashMap, HashSet};

use super::Candidate;
use crate::error::BallotError;

/// A strict, possibly incomplete, ranking of candidates. The most preferred
/// candidate comes first.
///
/// An empty ballot is allowed; it takes part in no round of any count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ballot<C> {
    order: Vec<C>,
}

impl<C: Candidate> Ballot<C> {
    /// Build a ballot from `order`, rejecting it if a candidate appears more
    /// than once.
    pub fn new(order: Vec<C>) -> Result<Self, BallotError<C>> {
        let mut seen: HashMap<&C, usize> = HashMap::with_capacity(order.len());
        for (i, c) in order.iter().enumerate() {
            if let Some(&first) = seen.get(c) {
                return Err(BallotError::DuplicateCandidate {
                    candidate: c.clone(),
                    first,
                    second: i,
                });
            }
            seen.insert(c, i);
        }
        Ok(Ballot { order })
    }

    pub fn empty() -> Self {
        Ballot { order: Vec::new() }
    }

    /// The most preferred candidate still on the ballot.
    pub fn top(&self) -> Option<&C> {
        self.order.first()
    }

    pub fn is_exhausted(&self) -> bool {
        self.order.is_empty()
    }

    /// A copy of this ballot with every candidate in `eliminated` struck out.
    /// The relative order of the rest is kept.
    pub fn without(&self, eliminated: &HashSet<C>) -> Self {
        let order = self.order.iter().filter(|c| !eliminated.contains(c)).cloned().collect();
        Ballot { order }
    }

    /// 0-indexed rank of `candidate`, if it is on the ballot.
    pub fn position(&self, candidate: &C) -> Option<usize> {
        self.order.iter().position(|c| c == candidate)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.order
    }
}

impl<C: Candidate> TryFrom<Vec<C>> for Ballot<C> {
    type Error = BallotError<C>;

    fn try_from(order: Vec<C>) -> Result<Self, Self::Error> {
        Ballot::new(order)
    }
}

impl<C> From<Ballot<C>> for Vec<C> {
    fn from(ballot: Ballot<C>) -> Self {
        ballot.order
    }
}

impl<'a, C> IntoIterator for &'a Ballot<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
