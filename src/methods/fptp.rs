use super::{leader, Description, Outcome, VotingMethod};
use crate::formats::{BallotSet, Candidate};

/// First past the post: the candidate ranked first on the most ballots wins.
///
/// Only the top of each ballot is looked at. Ties go to the candidate that
/// appears first on the ballots.
pub struct Fptp<C> {
    candidates: Vec<C>,
    score: Vec<usize>,
}

impl<C: Candidate> VotingMethod<C> for Fptp<C> {
    fn describe() -> Description {
        Description {
            summary: "First Past The Post (FPTP): the candidate ranked first on the most ballots \
                      wins.",
            example: "Example: if more people rank 'A' as their top choice than any other \
                      candidate, 'A' wins.",
        }
    }

    fn count(data: &BallotSet<C>) -> Self {
        let (candidates, index) = data.candidate_index();
        let mut score: Vec<usize> = vec![0; candidates.len()];
        for top in data.iter().filter_map(|b| b.top()) {
            score[index[top]] += 1;
        }
        log::trace!("fptp scores: {:?}", candidates.iter().zip(&score).collect::<Vec<_>>());
        Fptp { candidates, score }
    }

    fn get_score(&self) -> &[usize] {
        &self.score
    }

    fn candidates(&self) -> &[C] {
        &self.candidates
    }

    fn winner(&self) -> Outcome<C> {
        leader(&self.score).filter(|&i| self.score[i] > 0).map(|i| self.candidates[i].clone()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(ballots: Vec<Vec<u32>>) -> Fptp<u32> {
        Fptp::count(&BallotSet::try_from(ballots).unwrap())
    }

    #[test]
    fn tie_goes_to_first_seen() {
        let f = count(vec![
            vec![1, 3, 4, 2, 5],
            vec![2, 3, 4, 5, 1],
            vec![2, 4, 3, 1, 5],
            vec![1, 3, 4, 2, 5],
        ]);
        assert_eq!(f.candidates(), &[1, 3, 4, 2, 5]);
        assert_eq!(f.get_score(), &[2, 0, 0, 2, 0]);
        assert_eq!(f.winner(), Outcome::Winner(1));
        assert_eq!(f.get_order(), vec![0, 1, 1, 0, 1]);

        let f = count(vec![vec![2, 1], vec![1, 2]]);
        assert_eq!(f.winner(), Outcome::Winner(2));
    }

    #[test]
    fn only_top_counts() {
        let f = count(vec![vec![7], vec![8, 7], vec![8], vec![], vec![7, 8]]);
        assert_eq!(f.get_score(), &[2, 2]);
        assert_eq!(f.winner(), Outcome::Winner(7));
        let f = count(vec![vec![7, 8], vec![8, 7], vec![8]]);
        assert_eq!(f.winner(), Outcome::Winner(8));
    }

    #[test]
    fn empty_ballots() {
        assert_eq!(count(vec![]).winner(), Outcome::NoWinner);
        assert_eq!(count(vec![vec![], vec![]]).winner(), Outcome::NoWinner);
    }

    #[quickcheck]
    fn qc_majority_wins(set: BallotSet<usize>) -> bool {
        let f = Fptp::count(&set);
        let cast = set.iter().filter(|b| !b.is_exhausted()).count();
        match f.get_score().iter().position(|&s| 2 * s > cast) {
            Some(i) => f.winner() == Outcome::Winner(f.candidates()[i]),
            None => true,
        }
    }

    #[quickcheck]
    fn qc_scores_sum_to_cast_ballots(set: BallotSet<usize>) -> bool {
        let cast = set.iter().filter(|b| !b.is_exhausted()).count();
        Fptp::count(&set).get_score().iter().sum::<usize>() == cast
    }
}
