//! Keyed state store.
//!
//! [`FleetStore`] is the single source of truth for "what is the current
//! state of cabin X". It holds exactly one record per identity and supports
//! construction, point lookup/update, insertion, removal, and point-in-time
//! snapshots. Ranking reads go through [`FleetStore::snapshot`] so that the
//! ranking engine never touches live records.

mod db;

pub use db::FleetStore;
