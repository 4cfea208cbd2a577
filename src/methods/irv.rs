use std::collections::HashSet;

use super::{Description, Outcome, VotingMethod};
use crate::formats::{BallotSet, Candidate};

/// One round of an instant runoff count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// Top-choice votes of every candidate, indexed like
    /// [`BallotSet::candidates`]. Candidates eliminated in an earlier round
    /// have no entry in `continuing`.
    pub counts: Vec<usize>,
    /// Candidates (by index) still in the running at the start of the round.
    pub continuing: Vec<usize>,
    /// Candidates (by index) eliminated at the end of the round. Empty if the
    /// round produced a winner.
    pub eliminated: Vec<usize>,
}

/// Instant runoff voting.
///
/// Every round each ballot counts for its top remaining candidate. A
/// candidate supported by more than half of *all* ballots cast wins,
/// exhausted ballots included. Otherwise every candidate tied for the fewest
/// votes is eliminated at once, and the count is repeated. If no candidate
/// is left on any ballot, there is no winner.
///
/// The caller's ballots are never modified; elimination works on copies.
pub struct InstantRunoff<C> {
    candidates: Vec<C>,
    rounds: Vec<Round>,
    winner: Option<usize>,
}

impl<C: Candidate> InstantRunoff<C> {
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

impl<C: Candidate> VotingMethod<C> for InstantRunoff<C> {
    fn describe() -> Description {
        Description {
            summary: "Instant Runoff Voting (IRV): if no candidate has a majority of top-ranked \
                      votes, the candidates with the fewest votes are eliminated and their \
                      ballots move to the next preference, until one candidate has a majority.",
            example: "Example: if nobody gets more than 50% of the top votes, the least popular \
                      candidate is dropped and those ballots count for their second choice.",
        }
    }

    fn count(data: &BallotSet<C>) -> Self {
        let (candidates, index) = data.candidate_index();
        let total = data.voters();
        let mut rounds = Vec::new();
        let mut working = data.clone();
        let mut winner = None;

        loop {
            let mut on_ballot = vec![false; candidates.len()];
            let mut counts = vec![0; candidates.len()];
            for ballot in &working {
                for c in ballot {
                    on_ballot[index[c]] = true;
                }
                if let Some(top) = ballot.top() {
                    counts[index[top]] += 1;
                }
            }
            let continuing: Vec<usize> = (0..candidates.len()).filter(|&i| on_ballot[i]).collect();
            if continuing.is_empty() {
                log::debug!("round {}: no candidates left", rounds.len() + 1);
                break;
            }

            // At most one candidate can hold a strict majority.
            if let Some(&w) = continuing.iter().find(|&&i| 2 * counts[i] > total) {
                log::debug!(
                    "round {}: {:?} wins with {} of {} votes",
                    rounds.len() + 1,
                    candidates[w],
                    counts[w],
                    total
                );
                rounds.push(Round { counts, continuing, eliminated: Vec::new() });
                winner = Some(w);
                break;
            }

            let lowest = continuing.iter().map(|&i| counts[i]).min().unwrap_or(0);
            let eliminated: Vec<usize> =
                continuing.iter().copied().filter(|&i| counts[i] == lowest).collect();
            log::debug!(
                "round {}: no majority of {}, eliminating {:?} with {} votes each",
                rounds.len() + 1,
                total,
                eliminated.iter().map(|&i| &candidates[i]).collect::<Vec<_>>(),
                lowest
            );

            let struck: HashSet<C> = eliminated.iter().map(|&i| candidates[i].clone()).collect();
            working = working.without(&struck);
            rounds.push(Round { counts, continuing, eliminated });

            if working.is_exhausted() {
                log::debug!("every ballot exhausted, no winner");
                break;
            }
        }

        InstantRunoff { candidates, rounds, winner }
    }

    /// Votes of every candidate in the last round.
    fn get_score(&self) -> &[usize] {
        self.rounds.last().map_or(&[][..], |r| r.counts.as_slice())
    }

    fn candidates(&self) -> &[C] {
        &self.candidates
    }

    fn winner(&self) -> Outcome<C> {
        self.winner.map(|i| self.candidates[i].clone()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(ballots: Vec<Vec<u32>>) -> InstantRunoff<u32> {
        InstantRunoff::count(&BallotSet::try_from(ballots).unwrap())
    }

    #[test]
    fn sample_eliminates_ties_together() {
        let set = BallotSet::try_from(vec![
            vec![1, 3, 4, 2, 5],
            vec![2, 3, 4, 5, 1],
            vec![2, 4, 3, 1, 5],
            vec![1, 3, 4, 2, 5],
        ])
        .unwrap();
        let copy = set.clone();
        let irv = InstantRunoff::count(&set);
        // candidates: [1, 3, 4, 2, 5]
        assert_eq!(
            irv.rounds(),
            &[
                Round {
                    counts: vec![2, 0, 0, 2, 0],
                    continuing: vec![0, 1, 2, 3, 4],
                    eliminated: vec![1, 2, 4],
                },
                Round { counts: vec![2, 0, 0, 2, 0], continuing: vec![0, 3], eliminated: vec![0, 3] },
            ]
        );
        assert_eq!(irv.winner(), Outcome::NoWinner);
        assert_eq!(set, copy);
    }

    #[test]
    fn transfers_reach_majority() {
        // Round 1: 1 -> 2, 2 -> 2, 3 -> 1. 3 is out and its ballot goes to 2.
        let irv = count(vec![vec![1], vec![1, 2], vec![2, 1], vec![2], vec![3, 2]]);
        assert_eq!(irv.rounds().len(), 2);
        assert_eq!(irv.rounds()[0].eliminated, vec![2]);
        assert_eq!(irv.winner(), Outcome::Winner(2));
        assert_eq!(irv.get_score(), &[2, 3, 0]);
    }

    #[test]
    fn first_round_majority() {
        let irv = count(vec![vec![4, 1], vec![4], vec![1, 4]]);
        assert_eq!(irv.rounds().len(), 1);
        assert_eq!(irv.winner(), Outcome::Winner(4));
    }

    #[test]
    fn majority_counts_exhausted_ballots() {
        // After 3 is eliminated its ballot is exhausted but still counts
        // towards the total of 5, so 2 votes is never a majority.
        let irv = count(vec![vec![1], vec![1], vec![2], vec![2, 1], vec![3]]);
        assert_eq!(irv.rounds()[0].eliminated, vec![2]);
        // Round 2: 1 -> 2, 2 -> 2. Both out, nothing left.
        assert_eq!(irv.rounds()[1].eliminated, vec![0, 1]);
        assert_eq!(irv.winner(), Outcome::NoWinner);

        let irv = count(vec![vec![1], vec![1], vec![1], vec![2], vec![]]);
        assert_eq!(irv.winner(), Outcome::Winner(1));
        let irv = count(vec![vec![1], vec![1], vec![2], vec![], vec![]]);
        assert_eq!(irv.rounds()[0].eliminated, vec![1]);
        assert_eq!(irv.winner(), Outcome::NoWinner);
    }

    #[test]
    fn empty_ballots() {
        assert_eq!(count(vec![]).winner(), Outcome::NoWinner);
        let irv = count(vec![vec![], vec![]]);
        assert_eq!(irv.winner(), Outcome::NoWinner);
        assert!(irv.rounds().is_empty());
        assert!(irv.get_score().is_empty());
    }

    #[quickcheck]
    fn qc_continuing_shrinks(set: BallotSet<usize>) -> bool {
        let irv = InstantRunoff::count(&set);
        irv.rounds().windows(2).all(|w| w[1].continuing.len() < w[0].continuing.len())
            && irv.rounds().len() <= irv.candidates().len()
    }

    #[quickcheck]
    fn qc_winner_has_majority(set: BallotSet<usize>) -> bool {
        let irv = InstantRunoff::count(&set);
        match irv.winner() {
            Outcome::Winner(w) => {
                let i = irv.candidates().iter().position(|c| *c == w).unwrap();
                2 * irv.get_score()[i] > set.voters()
            }
            Outcome::NoWinner => true,
        }
    }

    #[quickcheck]
    fn qc_input_untouched(set: BallotSet<usize>) -> bool {
        let copy = set.clone();
        let first = InstantRunoff::count(&set).winner();
        set == copy && InstantRunoff::count(&set).winner() == first
    }
}
