use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{
    error::ParseMethodError,
    formats::{BallotSet, Candidate},
};

mod borda;
pub use borda::Borda;
mod fptp;
pub use fptp::Fptp;
mod irv;
pub use irv::{InstantRunoff, Round};

/// Result of a count: a single winner, or nobody.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<C> {
    Winner(C),
    /// No candidate could be determined, e.g. every ballot was empty.
    NoWinner,
}

impl<C> Outcome<C> {
    pub fn winner(&self) -> Option<&C> {
        match self {
            Outcome::Winner(c) => Some(c),
            Outcome::NoWinner => None,
        }
    }

    pub fn is_no_winner(&self) -> bool {
        matches!(self, Outcome::NoWinner)
    }
}

impl<C> From<Option<C>> for Outcome<C> {
    fn from(value: Option<C>) -> Self {
        value.map_or(Outcome::NoWinner, Outcome::Winner)
    }
}

/// Human readable explanation of a voting method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
    pub summary: &'static str,
    pub example: &'static str,
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.summary, self.example)
    }
}

/// Trait shared by every voting method
pub trait VotingMethod<C: Candidate>: Sized {
    /// What the method does, with a short example.
    fn describe() -> Description;

    /// Counts all the votes. Never fails and never modifies `data`.
    fn count(data: &BallotSet<C>) -> Self;

    /// Internal score of every candidate, indexed like
    /// [`BallotSet::candidates`]. Larger values are better.
    fn get_score(&self) -> &[usize];

    /// The candidates, in the order used by `get_score`.
    fn candidates(&self) -> &[C];

    fn winner(&self) -> Outcome<C>;

    /// Gets a partial order of the candidates
    fn get_order(&self) -> Vec<usize> {
        get_order(self.get_score(), true)
    }
}

/// Index of the largest score. Ties go to the lowest index, which is the
/// candidate that appeared first on the ballots.
pub(crate) fn leader(score: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &s) in score.iter().enumerate() {
        match best {
            Some(b) if score[b] >= s => {}
            _ => best = Some(i),
        }
    }
    best
}

// Convert a list of numbers to the partial order of the list. High numbers in
// input list will get high numbers in new list, but can be changed using
// `reverse`. Equal numbers share a position.
pub fn get_order<T: Ord>(v: &[T], reverse: bool) -> Vec<usize> {
    let mut sorted: Vec<(usize, &T)> = v.iter().enumerate().collect();
    sorted.sort_by(|a, b| if reverse { b.1.cmp(a.1) } else { a.1.cmp(b.1) });
    let mut out = vec![0; v.len()];
    let mut position = 0;
    for w in 0..sorted.len() {
        if w > 0 && sorted[w].1 != sorted[w - 1].1 {
            position += 1;
        }
        out[sorted[w].0] = position;
    }
    out
}

/// The counting methods this crate supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Fptp,
    Borda,
    InstantRunoff,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Fptp, Method::Borda, Method::InstantRunoff];

    pub fn describe(self) -> Description {
        // The candidate type doesn't affect the description.
        match self {
            Method::Fptp => <Fptp<()> as VotingMethod<()>>::describe(),
            Method::Borda => <Borda<()> as VotingMethod<()>>::describe(),
            Method::InstantRunoff => <InstantRunoff<()> as VotingMethod<()>>::describe(),
        }
    }

    /// Find the winner of `ballots` with this method.
    pub fn tally<C: Candidate>(self, ballots: &BallotSet<C>) -> Outcome<C> {
        match self {
            Method::Fptp => Fptp::count(ballots).winner(),
            Method::Borda => Borda::count(ballots).winner(),
            Method::InstantRunoff => InstantRunoff::count(ballots).winner(),
        }
    }

    /// Pick one of the methods uniformly at random.
    pub fn choose<R: Rng>(rng: &mut R) -> Self {
        Method::ALL[rng.gen_range(0..Method::ALL.len())]
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Fptp => "fptp",
            Method::Borda => "borda",
            Method::InstantRunoff => "irv",
        };
        f.write_str(name)
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fptp" | "plurality" => Ok(Method::Fptp),
            "borda" => Ok(Method::Borda),
            "irv" | "runoff" | "instant-runoff" => Ok(Method::InstantRunoff),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}
