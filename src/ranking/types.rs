//! Core traits for heuristic scoring and result ordering.

use crate::error::ScoreError;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a ranking: which cabin and how it scored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankEntry {
    /// Identity of the ranked cabin.
    pub identity: String,
    /// Score the heuristic assigned to its state.
    pub score: f64,
}

impl RankEntry {
    /// Builds an entry from an identity and a score.
    pub fn new(identity: impl Into<String>, score: f64) -> Self {
        Self {
            identity: identity.into(),
            score,
        }
    }
}

/// A scoring rule mapping one cabin state to a priority value.
///
/// What the score means — estimated travel time, energy cost, wear — is
/// the heuristic's business; the engine only sorts. A heuristic must be a
/// pure function of the state it is given (no hidden mutable context), so
/// that ranking the same snapshot twice is reproducible.
///
/// Scoring is fallible: an `Err` aborts the ranking call and propagates as
/// [`Error::Heuristic`](crate::error::Error::Heuristic), carrying this
/// heuristic's [`name`](Self::name) and the offending state's identity.
///
/// # Examples
///
/// ```
/// use lift_fleet::error::ScoreError;
/// use lift_fleet::ranking::Heuristic;
/// # use lift_fleet::state::CabinState;
/// use lift_fleet::state::LiftState;
///
/// /// Prefer cabins closest to the lobby (floor index 0).
/// struct FloorsFromLobby;
///
/// impl Heuristic<LiftState> for FloorsFromLobby {
///     fn name(&self) -> &str {
///         "FloorsFromLobby"
///     }
///     fn score(&self, state: &LiftState) -> Result<f64, ScoreError> {
///         match state.floor_index() {
///             Some(idx) => Ok(idx as f64),
///             None => Err(format!("{}: current floor not serviced", state.identity()).into()),
///         }
///     }
/// }
/// ```
pub trait Heuristic<S>: Send + Sync {
    /// Returns the name of this heuristic, used in error reports.
    fn name(&self) -> &str;

    /// Computes the priority score of a single state.
    fn score(&self, state: &S) -> Result<f64, ScoreError>;
}

/// Ordering rule applied to scored pairs.
///
/// Implementations must be consistent (a total preorder over entries) or
/// the sort result is unspecified. When `compare` returns
/// [`Ordering::Equal`], the engine's
/// [`TieBreaker`](crate::ranking::TieBreaker) takes over.
pub trait Comparator: Send + Sync {
    /// Orders two scored pairs.
    fn compare(&self, lhs: &RankEntry, rhs: &RankEntry) -> Ordering;
}

/// Default comparator: ascending by score, lowest first.
///
/// `NaN` scores compare equal to everything rather than panicking; a
/// heuristic that can produce `NaN` should return an error instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AscendingScore;

impl Comparator for AscendingScore {
    fn compare(&self, lhs: &RankEntry, rhs: &RankEntry) -> Ordering {
        lhs.score.partial_cmp(&rhs.score).unwrap_or(Ordering::Equal)
    }
}

/// Reverse of [`AscendingScore`]: highest score first, for callers that
/// want "best cabin first" without negating their heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingScore;

impl Comparator for DescendingScore {
    fn compare(&self, lhs: &RankEntry, rhs: &RankEntry) -> Ordering {
        AscendingScore.compare(rhs, lhs)
    }
}
