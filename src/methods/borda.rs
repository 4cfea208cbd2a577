// There are several different types of borda count. Here every ballot is
// scored on its own length, so a short ballot hands out fewer points than a
// long one. Unranked candidates get nothing from that ballot.

use super::{leader, Description, Outcome, VotingMethod};
use crate::formats::{BallotSet, Candidate};

/// Borda count: on a ballot of length `L` the candidate at 0-indexed
/// position `i` gets `L - i` points, and the candidate with the most points
/// wins.
pub struct Borda<C> {
    candidates: Vec<C>,
    score: Vec<usize>,
}

impl<C: Candidate> VotingMethod<C> for Borda<C> {
    fn describe() -> Description {
        Description {
            summary: "Borda Count: points are given for every position in a ranking, and the \
                      candidate with the highest total wins.",
            example: "Example: on a ballot ranking N candidates, 1st place gets N points, 2nd \
                      place N-1, and so on down to 1 point for last place.",
        }
    }

    fn count(data: &BallotSet<C>) -> Self {
        let (candidates, index) = data.candidate_index();
        let mut score: Vec<usize> = vec![0; candidates.len()];
        for vote in data {
            let n = vote.len();
            for (i, c) in vote.iter().enumerate() {
                score[index[c]] += n - i;
            }
        }
        log::trace!("borda scores: {:?}", candidates.iter().zip(&score).collect::<Vec<_>>());
        Borda { candidates, score }
    }

    fn get_score(&self) -> &[usize] {
        &self.score
    }

    fn candidates(&self) -> &[C] {
        &self.candidates
    }

    fn winner(&self) -> Outcome<C> {
        leader(&self.score).map(|i| self.candidates[i].clone()).into()
    }
}
