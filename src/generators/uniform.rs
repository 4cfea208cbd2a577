use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

use crate::formats::{Ballot, BallotSet};

/// Sample `voters` uniformly random ballots over the candidates
/// `0..candidates`.
///
/// The length of every ballot is uniform in `0..=candidates`, so empty
/// ballots do occur. The ranking itself is a uniformly random permutation.
pub fn uniform<R: Rng>(rng: &mut R, candidates: usize, voters: usize) -> BallotSet<usize> {
    let mut v: Vec<usize> = (0..candidates).collect();
    let range = Uniform::new_inclusive(0, candidates);
    let mut set = BallotSet::new();
    for _ in 0..voters {
        let len = range.sample(rng);
        v.shuffle(rng);
        // A permutation prefix can't repeat a candidate.
        if let Ok(ballot) = Ballot::new(v[..len].to_vec()) {
            set.add(ballot);
        }
    }
    set
}

/// Same as [`uniform`], but reproducible from `seed`.
pub fn seeded(seed: u64, candidates: usize, voters: usize) -> BallotSet<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    uniform(&mut rng, candidates, voters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Method;

    #[test]
    fn shape() {
        let set = seeded(3, 5, 200);
        assert_eq!(set.voters(), 200);
        assert!(set.iter().all(|b| b.len() <= 5 && b.iter().all(|&c| c < 5)));
        assert!(set.iter().any(|b| b.is_exhausted()));
    }

    #[test]
    fn same_seed_same_election() {
        let a = seeded(42, 4, 50);
        assert_eq!(a, seeded(42, 4, 50));
        for m in Method::ALL {
            assert_eq!(m.tally(&a), m.tally(&seeded(42, 4, 50)));
        }
    }

    #[test]
    fn no_candidates() {
        let set = seeded(0, 0, 10);
        assert_eq!(set.voters(), 10);
        assert!(set.is_exhausted());
    }
}
