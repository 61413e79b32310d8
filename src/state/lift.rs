//! Standard lift state record and its telemetry payload.

use super::types::CabinState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Door state reported by a cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DoorState {
    /// Doors fully closed.
    #[default]
    Closed,
    /// Doors opening or closing.
    Moving,
    /// Doors fully open.
    Open,
}

/// Motion state reported by a cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotionState {
    /// Holding at a floor.
    #[default]
    Stopped,
    /// Travelling up.
    Up,
    /// Travelling down.
    Down,
    /// Controller did not report a usable motion state.
    Unknown,
}

/// Operating mode reported by a cabin controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationMode {
    /// Mode not reported.
    #[default]
    Unknown,
    /// Normal passenger service.
    Human,
    /// Reserved for automated guided vehicles.
    Agv,
    /// Fire service mode.
    Fire,
    /// Taken out of service.
    Offline,
    /// Emergency operation.
    Emergency,
}

/// One telemetry sample for a single cabin, as delivered by the external
/// messaging layer.
///
/// The field set mirrors the standard lift state message: where the cabin
/// is, how it is moving, and which session (if any) currently holds it.
/// This crate treats the sample as an opaque value with an extractable
/// identity — nothing here is interpreted except `lift_name`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiftTelemetry {
    /// Unique cabin name; the store key.
    pub lift_name: String,
    /// Sample time, milliseconds since the Unix epoch.
    pub lift_time: i64,
    /// Floors this cabin can service, bottom to top.
    pub available_floors: Vec<String>,
    /// Floor the cabin is currently at or passing.
    pub current_floor: String,
    /// Floor the cabin is heading to; equals `current_floor` when holding.
    pub destination_floor: String,
    /// Door state.
    pub door_state: DoorState,
    /// Motion state.
    pub motion_state: MotionState,
    /// Operating mode.
    pub current_mode: OperationMode,
    /// Identifier of the session holding the cabin; empty when free.
    pub session_id: String,
}

/// State record for one cabin: the latest telemetry sample plus the derived
/// accessors heuristics commonly need.
///
/// # Examples
///
/// ```
/// use lift_fleet::state::{CabinState, LiftState, LiftTelemetry};
///
/// let state = LiftState::new(LiftTelemetry {
///     lift_name: "north_bank_1".into(),
///     available_floors: vec!["B1".into(), "L1".into(), "L2".into()],
///     current_floor: "L2".into(),
///     ..LiftTelemetry::default()
/// });
///
/// assert_eq!(state.identity(), "north_bank_1");
/// assert_eq!(state.floor_index(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiftState {
    telemetry: LiftTelemetry,
}

impl LiftState {
    /// Wraps a telemetry sample into a record.
    pub fn new(telemetry: LiftTelemetry) -> Self {
        Self { telemetry }
    }

    /// The raw telemetry payload.
    pub fn telemetry(&self) -> &LiftTelemetry {
        &self.telemetry
    }

    /// Index of the current floor within `available_floors`.
    ///
    /// `None` when the reported floor is not in the serviced list (e.g. the
    /// controller reports a maintenance level).
    pub fn floor_index(&self) -> Option<usize> {
        self.telemetry
            .available_floors
            .iter()
            .position(|f| *f == self.telemetry.current_floor)
    }

    /// Index of the destination floor within `available_floors`.
    pub fn destination_index(&self) -> Option<usize> {
        self.telemetry
            .available_floors
            .iter()
            .position(|f| *f == self.telemetry.destination_floor)
    }

    /// Whether the cabin is stopped with doors closed and no session
    /// holding it.
    pub fn is_idle(&self) -> bool {
        self.telemetry.motion_state == MotionState::Stopped
            && self.telemetry.door_state == DoorState::Closed
            && self.telemetry.session_id.is_empty()
    }
}

impl CabinState for LiftState {
    fn identity(&self) -> &str {
        &self.telemetry.lift_name
    }

    fn update(&mut self, other: Self) {
        self.telemetry = other.telemetry;
    }
}
