use std::collections::{HashMap, HashSet};

use super::{Ballot, Candidate};
use crate::error::BallotError;

/// Every ballot cast in one election, in the order they were added.
///
/// The order of the ballots never changes a result, except through tie
/// breaking: see [`BallotSet::candidates`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BallotSet<C> {
    ballots: Vec<Ballot<C>>,
}

impl<C> Default for BallotSet<C> {
    fn default() -> Self {
        BallotSet { ballots: Vec::new() }
    }
}

impl<C: Candidate> BallotSet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ballot: Ballot<C>) {
        self.ballots.push(ballot);
    }

    /// Number of ballots, including empty ones.
    pub fn voters(&self) -> usize {
        self.ballots.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ballot<C>> {
        self.ballots.iter()
    }

    /// Every candidate named on some ballot, in order of first appearance.
    ///
    /// Ballots are read in the order they were added, each from most to least
    /// preferred. All counting methods break ties in favour of the candidate
    /// that comes first here.
    pub fn candidates(&self) -> Vec<C> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for c in self.ballots.iter().flat_map(Ballot::iter) {
            if seen.insert(c) {
                out.push(c.clone());
            }
        }
        out
    }

    /// Maps every candidate to its index in [`BallotSet::candidates`].
    pub(crate) fn candidate_index(&self) -> (Vec<C>, HashMap<C, usize>) {
        let candidates = self.candidates();
        let index = candidates.iter().cloned().enumerate().map(|(i, c)| (c, i)).collect();
        (candidates, index)
    }

    /// True if no ballot names any candidate.
    pub fn is_exhausted(&self) -> bool {
        self.ballots.iter().all(Ballot::is_exhausted)
    }

    /// A copy of every ballot with the candidates in `eliminated` removed.
    pub fn without(&self, eliminated: &HashSet<C>) -> Self {
        BallotSet { ballots: self.ballots.iter().map(|b| b.without(eliminated)).collect() }
    }
}

impl<C: Candidate> FromIterator<Ballot<C>> for BallotSet<C> {
    fn from_iter<I: IntoIterator<Item = Ballot<C>>>(iter: I) -> Self {
        BallotSet { ballots: iter.into_iter().collect() }
    }
}

impl<C: Candidate> TryFrom<Vec<Vec<C>>> for BallotSet<C> {
    type Error = BallotError<C>;

    fn try_from(ballots: Vec<Vec<C>>) -> Result<Self, Self::Error> {
        ballots
            .into_iter()
            .enumerate()
            .map(|(i, b)| Ballot::new(b).map_err(|e| e.in_ballot(i)))
            .collect()
    }
}

impl<'a, C> IntoIterator for &'a BallotSet<C> {
    type Item = &'a Ballot<C>;
    type IntoIter = std::slice::Iter<'a, Ballot<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ballots.iter()
    }
}
