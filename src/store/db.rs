//! In-memory store of live cabin state records.

use crate::error::{Error, Result};
use crate::state::CabinState;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Authoritative in-memory set of cabin state records, keyed by identity.
///
/// Records are keyed strictly by identity: the key is an owned copy taken
/// at insertion and never derived from the payload, so mutating a record in
/// place (via [`find`](Self::find) or [`update`](Self::update)) cannot
/// corrupt the index. Exactly one record per identity exists at any time.
///
/// The store performs no locking and offers no concurrency guarantees
/// across calls. Callers mixing concurrent telemetry ingestion with
/// dispatch queries wrap the store in their own lock and rank over a
/// [`snapshot`](Self::snapshot) rather than over live records.
///
/// # Examples
///
/// ```
/// use lift_fleet::state::{LiftState, LiftTelemetry};
/// use lift_fleet::store::FleetStore;
///
/// let mut store = FleetStore::new();
/// store.insert_lift(LiftState::new(LiftTelemetry {
///     lift_name: "L1".into(),
///     ..LiftTelemetry::default()
/// }));
///
/// assert!(store.contains("L1"));
/// assert!(store.remove_lift("L1"));
/// assert!(store.is_empty());
/// ```
#[derive(Debug)]
pub struct FleetStore<S: CabinState> {
    lifts: HashMap<String, S>,
}

impl<S: CabinState> FleetStore<S> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            lifts: HashMap::new(),
        }
    }

    /// Builds a store from an initial collection of records.
    ///
    /// When two input records share an identity, the first one wins and
    /// later duplicates are dropped — the same resolution
    /// [`insert_lift`](Self::insert_lift) applies. Use
    /// [`update`](Self::update) to refresh a record after construction.
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut store = Self::new();
        for state in states {
            store.insert_lift(state);
        }
        store
    }

    /// Number of cabins currently tracked.
    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    /// Whether the store tracks no cabins at all.
    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    /// Whether a record with the given identity exists.
    pub fn contains(&self, identity: &str) -> bool {
        self.lifts.contains_key(identity)
    }

    /// Copies every current record into `out`.
    ///
    /// `out` is cleared first, so a caller can reuse one buffer across
    /// polling cycles. The copies are independent of the store: mutating
    /// them never affects the live records. Enumeration order is
    /// unspecified.
    pub fn snapshot_into(&self, out: &mut Vec<S>)
    where
        S: Clone,
    {
        out.clear();
        out.reserve(self.lifts.len());
        out.extend(self.lifts.values().cloned());
    }

    /// Point-in-time independent copy of every current record.
    ///
    /// See [`snapshot_into`](Self::snapshot_into) for the buffer-reusing
    /// variant.
    pub fn snapshot(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut out = Vec::new();
        self.snapshot_into(&mut out);
        out
    }

    /// Returns a mutable reference to the record with the given identity.
    ///
    /// This is the only read path that exposes a live (non-copied) handle.
    /// The borrow must end before the next structural mutation of the
    /// store; the borrow checker enforces that.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no record matches.
    pub fn find(&mut self, identity: &str) -> Result<&mut S> {
        self.lifts
            .get_mut(identity)
            .ok_or_else(|| Error::NotFound(identity.to_owned()))
    }

    /// Replaces the payload of the record matching `new_state`'s identity.
    ///
    /// Matching follows [`find`](Self::find)'s rule — identity equality
    /// only. This is not an upsert: the record must already exist, and on
    /// failure the store is unchanged. Subsequent `find`/`snapshot` calls
    /// observe the new payload.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no record matches.
    pub fn update(&mut self, new_state: S) -> Result<()> {
        let record = self.find(new_state.identity())?;
        trace!(lift = record.identity(), "state updated");
        record.update(new_state);
        Ok(())
    }

    /// Adds a new record to the store.
    ///
    /// Insertion is a no-op when a record with the same identity is already
    /// tracked; the existing record keeps its payload and `false` comes
    /// back. Callers refreshing a known cabin use
    /// [`update`](Self::update) instead.
    pub fn insert_lift(&mut self, state: S) -> bool {
        match self.lifts.entry(state.identity().to_owned()) {
            Entry::Occupied(_) => {
                trace!(lift = state.identity(), "insert ignored, already tracked");
                false
            }
            Entry::Vacant(slot) => {
                debug!(lift = state.identity(), "tracking new lift");
                slot.insert(state);
                true
            }
        }
    }

    /// Removes the record with the given identity.
    ///
    /// Returns whether a record was actually removed. Removing an absent
    /// identity is a routine outcome, not an error, and leaves the store
    /// unchanged.
    pub fn remove_lift(&mut self, identity: &str) -> bool {
        let removed = self.lifts.remove(identity).is_some();
        if removed {
            debug!(lift = identity, "lift removed from fleet");
        }
        removed
    }
}

impl<S: CabinState> Default for FleetStore<S> {
    fn default() -> Self {
        Self::new()
    }
}
