//! Priority ranking of cabin states.
//!
//! Converts a collection of cabin states — typically a
//! [`FleetStore::snapshot`](crate::store::FleetStore::snapshot) — into a
//! totally ordered list of ([`identity`](crate::state::CabinState::identity),
//! score) pairs:
//!
//! - [`Heuristic`] scores one state; the engine is generic over it and
//!   defines only the contract, never a concrete scoring policy.
//! - [`Comparator`] orders the scored pairs. [`AscendingScore`] (lowest
//!   score first) is the default; callers wanting "best cabin first" either
//!   invert their heuristic's sign convention or install
//!   [`DescendingScore`].
//! - [`TieBreaker`] decides exact-tie behavior on top of the comparator.
//!
//! The engine is stateless per call and O(n log n) in the number of states.

mod engine;
mod types;

pub use engine::{Ranker, TieBreaker};
pub use types::{AscendingScore, Comparator, DescendingScore, Heuristic, RankEntry};
