//! Random elections, used for testing and for trying out the counting
//! methods on more ballots than anyone would type by hand.

mod uniform;
pub use uniform::{seeded, uniform};
