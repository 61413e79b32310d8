//! Ranking engine.

use super::types::{AscendingScore, Comparator, Heuristic, RankEntry};
use crate::error::{Error, Result};
use crate::state::CabinState;
use std::cmp::Ordering;
use tracing::trace;

/// Strategy for breaking exact score ties between entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreaker {
    /// Keep the input order (the sort is stable).
    #[default]
    PreserveOrder,

    /// Break ties lexicographically by identity, deterministic across
    /// differently-ordered snapshots of the same fleet.
    ByIdentity,
}

/// Engine producing a priority ordering of cabin states.
///
/// Generic over the injected [`Heuristic`]; the [`Comparator`] and
/// [`TieBreaker`] are configured once on the engine. Stateless per call:
/// [`rank`](Self::rank) retains nothing between invocations, so a single
/// engine serves any number of snapshots.
///
/// # Examples
///
/// ```
/// use lift_fleet::error::ScoreError;
/// use lift_fleet::ranking::{Heuristic, Ranker};
/// use lift_fleet::state::{LiftState, LiftTelemetry};
///
/// struct SampleAge;
///
/// impl Heuristic<LiftState> for SampleAge {
///     fn name(&self) -> &str {
///         "SampleAge"
///     }
///     fn score(&self, state: &LiftState) -> Result<f64, ScoreError> {
///         Ok(-(state.telemetry().lift_time as f64))
///     }
/// }
///
/// let states: Vec<LiftState> = ["L1", "L2"]
///     .iter()
///     .enumerate()
///     .map(|(i, name)| {
///         LiftState::new(LiftTelemetry {
///             lift_name: (*name).into(),
///             lift_time: i as i64,
///             ..LiftTelemetry::default()
///         })
///     })
///     .collect();
///
/// // Freshest sample first: lift_time negated, ascending comparator.
/// let ranking = Ranker::new().rank(&states, &SampleAge).unwrap();
/// assert_eq!(ranking[0].identity, "L2");
/// ```
pub struct Ranker {
    comparator: Box<dyn Comparator>,
    tie_breaker: TieBreaker,
}

impl Ranker {
    /// Creates an engine with the default [`AscendingScore`] comparator
    /// (lowest score first) and [`TieBreaker::PreserveOrder`].
    pub fn new() -> Self {
        Self {
            comparator: Box::new(AscendingScore),
            tie_breaker: TieBreaker::default(),
        }
    }

    /// Replaces the comparator.
    pub fn with_comparator<C: Comparator + 'static>(mut self, comparator: C) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Scores every state and sorts the (identity, score) pairs.
    ///
    /// The sort is stable: with [`TieBreaker::PreserveOrder`], entries
    /// whose scores tie exactly keep their input order.
    ///
    /// # Errors
    ///
    /// [`Error::Heuristic`] as soon as the heuristic fails on any state.
    /// No partial ranking is ever returned.
    pub fn rank<S, H>(&self, states: &[S], heuristic: &H) -> Result<Vec<RankEntry>>
    where
        S: CabinState,
        H: Heuristic<S>,
    {
        let mut out = Vec::new();
        self.rank_into(&mut out, states, heuristic)?;
        Ok(out)
    }

    /// As [`rank`](Self::rank), filling a caller-supplied buffer.
    ///
    /// `out` is cleared first; on error it is left empty rather than
    /// partially filled.
    pub fn rank_into<S, H>(&self, out: &mut Vec<RankEntry>, states: &[S], heuristic: &H) -> Result<()>
    where
        S: CabinState,
        H: Heuristic<S>,
    {
        out.clear();
        out.reserve(states.len());

        for state in states {
            match heuristic.score(state) {
                Ok(score) => out.push(RankEntry::new(state.identity(), score)),
                Err(source) => {
                    out.clear();
                    return Err(Error::Heuristic {
                        heuristic: heuristic.name().to_owned(),
                        identity: state.identity().to_owned(),
                        source,
                    });
                }
            }
        }

        out.sort_by(|lhs, rhs| {
            self.comparator
                .compare(lhs, rhs)
                .then_with(|| match self.tie_breaker {
                    TieBreaker::PreserveOrder => Ordering::Equal,
                    TieBreaker::ByIdentity => lhs.identity.cmp(&rhs.identity),
                })
        });

        trace!(
            states = states.len(),
            heuristic = heuristic.name(),
            "fleet ranked"
        );
        Ok(())
    }

    /// Returns the top-ranked entry, or `None` for an empty collection.
    ///
    /// # Errors
    ///
    /// Same as [`rank`](Self::rank).
    pub fn best<S, H>(&self, states: &[S], heuristic: &H) -> Result<Option<RankEntry>>
    where
        S: CabinState,
        H: Heuristic<S>,
    {
        Ok(self.rank(states, heuristic)?.into_iter().next())
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use crate::store::FleetStore;

    // Minimal record: name plus the field the heuristics read.
    #[derive(Debug, Clone, PartialEq)]
    struct Cab {
        name: String,
        load: f64,
    }

    impl CabinState for Cab {
        fn identity(&self) -> &str {
            &self.name
        }
        fn update(&mut self, other: Self) {
            self.load = other.load;
        }
    }

    fn cab(name: &str, load: f64) -> Cab {
        Cab {
            name: name.into(),
            load,
        }
    }

    // Heuristic returning the payload field directly.
    struct ByLoad;

    impl Heuristic<Cab> for ByLoad {
        fn name(&self) -> &str {
            "ByLoad"
        }
        fn score(&self, state: &Cab) -> Result<f64, ScoreError> {
            Ok(state.load)
        }
    }

    // Heuristic that refuses negative loads.
    struct Strict;

    impl Heuristic<Cab> for Strict {
        fn name(&self) -> &str {
            "Strict"
        }
        fn score(&self, state: &Cab) -> Result<f64, ScoreError> {
            if state.load < 0.0 {
                Err(format!("negative load {}", state.load).into())
            } else {
                Ok(state.load)
            }
        }
    }

    fn pairs(entries: &[RankEntry]) -> Vec<(&str, f64)> {
        entries
            .iter()
            .map(|e| (e.identity.as_str(), e.score))
            .collect()
    }

    #[test]
    fn test_rank_ascending_by_default() {
        let states = vec![cab("A", 3.0), cab("B", 1.0), cab("C", 2.0)];
        let ranking = Ranker::new().rank(&states, &ByLoad).unwrap();

        assert_eq!(pairs(&ranking), vec![("B", 1.0), ("C", 2.0), ("A", 3.0)]);
    }

    #[test]
    fn test_rank_descending_comparator() {
        let states = vec![cab("A", 3.0), cab("B", 1.0), cab("C", 2.0)];
        let ranking = Ranker::new()
            .with_comparator(crate::ranking::DescendingScore)
            .rank(&states, &ByLoad)
            .unwrap();

        assert_eq!(pairs(&ranking), vec![("A", 3.0), ("C", 2.0), ("B", 1.0)]);
    }

    #[test]
    fn test_rank_empty_states() {
        let ranking = Ranker::new().rank(&[], &ByLoad).unwrap();
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let states = vec![cab("Z", 1.0), cab("A", 1.0), cab("M", 0.5)];
        let ranking = Ranker::new().rank(&states, &ByLoad).unwrap();

        // M wins outright; Z and A tie exactly and keep input order.
        assert_eq!(pairs(&ranking), vec![("M", 0.5), ("Z", 1.0), ("A", 1.0)]);
    }

    #[test]
    fn test_ties_broken_by_identity() {
        let states = vec![cab("Z", 1.0), cab("A", 1.0), cab("M", 1.0)];
        let ranking = Ranker::new()
            .with_tie_breaker(TieBreaker::ByIdentity)
            .rank(&states, &ByLoad)
            .unwrap();

        assert_eq!(pairs(&ranking), vec![("A", 1.0), ("M", 1.0), ("Z", 1.0)]);
    }

    #[test]
    fn test_rank_content_is_input_order_independent() {
        let forward = vec![cab("A", 3.0), cab("B", 1.0), cab("C", 2.0)];
        let reversed: Vec<Cab> = forward.iter().rev().cloned().collect();

        let engine = Ranker::new();
        let from_forward = engine.rank(&forward, &ByLoad).unwrap();
        let from_reversed = engine.rank(&reversed, &ByLoad).unwrap();

        // Distinct scores, so the full orderings must agree.
        assert_eq!(from_forward, from_reversed);
    }

    #[test]
    fn test_heuristic_failure_propagates() {
        let states = vec![cab("A", 3.0), cab("B", -1.0)];
        let err = Ranker::new().rank(&states, &Strict).unwrap_err();

        match err {
            Error::Heuristic {
                heuristic,
                identity,
                ..
            } => {
                assert_eq!(heuristic, "Strict");
                assert_eq!(identity, "B");
            }
            other => panic!("expected Heuristic error, got {other:?}"),
        }
    }

    #[test]
    fn test_rank_into_left_empty_on_failure() {
        let mut out = vec![RankEntry::new("stale", 0.0)];
        let states = vec![cab("A", 3.0), cab("B", -1.0)];

        assert!(Ranker::new().rank_into(&mut out, &states, &Strict).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_rank_into_reuses_buffer() {
        let engine = Ranker::new();
        let mut out = Vec::new();

        engine
            .rank_into(&mut out, &[cab("A", 3.0), cab("B", 1.0)], &ByLoad)
            .unwrap();
        assert_eq!(out.len(), 2);

        engine.rank_into(&mut out, &[cab("C", 2.0)], &ByLoad).unwrap();
        assert_eq!(pairs(&out), vec![("C", 2.0)]);
    }

    #[test]
    fn test_best_returns_top_entry() {
        let states = vec![cab("A", 3.0), cab("B", 1.0)];
        let best = Ranker::new().best(&states, &ByLoad).unwrap().unwrap();

        assert_eq!(best.identity, "B");
        assert!((best.score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_best_empty_is_none() {
        assert!(Ranker::new().best(&[], &ByLoad).unwrap().is_none());
    }

    #[test]
    fn test_nan_score_does_not_panic() {
        struct Nan;
        impl Heuristic<Cab> for Nan {
            fn name(&self) -> &str {
                "Nan"
            }
            fn score(&self, state: &Cab) -> Result<f64, ScoreError> {
                Ok(if state.name == "A" { f64::NAN } else { state.load })
            }
        }

        let states = vec![cab("A", 0.0), cab("B", 1.0), cab("C", 2.0)];
        let ranking = Ranker::new().rank(&states, &Nan).unwrap();
        assert_eq!(ranking.len(), 3);
    }

    // ---- Snapshot-then-rank, end to end through the store ----

    #[test]
    fn test_store_snapshot_rank_scenario() {
        let mut store = FleetStore::new();
        store.insert_lift(cab("A", 3.0));
        store.insert_lift(cab("B", 1.0));
        store.insert_lift(cab("C", 2.0));

        let engine = Ranker::new();
        let ranking = engine.rank(&store.snapshot(), &ByLoad).unwrap();
        assert_eq!(pairs(&ranking), vec![("B", 1.0), ("C", 2.0), ("A", 3.0)]);

        // Newer telemetry for B re-ranks it to the back.
        store.update(cab("B", 5.0)).unwrap();
        let ranking = engine.rank(&store.snapshot(), &ByLoad).unwrap();
        assert_eq!(pairs(&ranking), vec![("C", 2.0), ("A", 3.0), ("B", 5.0)]);
    }
}
