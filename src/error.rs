//! Crate error type.

use thiserror::Error;

/// Boxed failure returned by a [`Heuristic`](crate::ranking::Heuristic)
/// when it cannot score a state.
pub type ScoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the store and the ranking engine.
///
/// Routine outcomes — inserting an identity that is already tracked,
/// removing one that is not — are expressed as booleans on the store API,
/// not as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No record with the requested identity exists in the store.
    #[error("lift `{0}` not found")]
    NotFound(String),

    /// A heuristic failed while scoring a state.
    ///
    /// The engine never suppresses this: a partial or garbage ranking is
    /// worse than a visible failure.
    #[error("heuristic `{heuristic}` failed scoring lift `{identity}`")]
    Heuristic {
        /// Name of the failing heuristic.
        heuristic: String,
        /// Identity of the state being scored when the failure occurred.
        identity: String,
        /// The underlying failure, preserved as the error source.
        #[source]
        source: ScoreError,
    },
}
