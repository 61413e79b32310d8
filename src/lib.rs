//! Fleet state tracking and priority ranking for lift dispatch.
//!
//! The decision-support core of a dispatch system: callers feed it observed
//! cabin telemetry and it answers "which cabin is best suited for the next
//! request". Two cooperating components:
//!
//! - **Store**: [`store::FleetStore`] owns the authoritative in-memory set
//!   of cabin state records, keyed by identity with uniqueness enforced.
//! - **Ranking**: [`ranking::Ranker`] scores a collection of states through
//!   a pluggable [`ranking::Heuristic`] and sorts the resulting
//!   (identity, score) pairs with a customizable [`ranking::Comparator`].
//!
//! Telemetry updates are applied to the store (insert / update / remove);
//! on demand the current states are pulled out via a snapshot and handed to
//! the ranking engine. The ranked list goes back to the dispatch policy,
//! which is out of scope here — as are the messaging transport that
//! delivers telemetry and any persistence beyond process lifetime.
//!
//! # Architecture
//!
//! The core is synchronous and single-threaded: no internal locking, no
//! async, every operation a bounded computation over in-memory data.
//! Callers mixing concurrent ingestion with dispatch queries wrap the store
//! in their own lock and use the snapshot-then-rank pattern, which decouples
//! ranking (read-only over a private copy) from mutation of the live store.
//!
//! This crate contains no concrete production heuristics — travel-time,
//! energy, or load-balancing scoring is defined by consumers against the
//! generic [`ranking::Heuristic`] trait.

pub mod error;
pub mod ranking;
pub mod state;
pub mod store;
