//! Drone state and persisted memory

pub mod parts;

pub use parts::{cargo_capacity, loadout_cost, Part, HOLD_CAPACITY};

use crate::core::error::Result;
use crate::core::types::{DroneId, Position, Role};
use crate::world::objects::Store;
use serde::{Deserialize, Serialize};

/// Which priority chain a drone runs this tick.
///
/// Transitions happen only at cargo extremes: empty flips Acting to
/// Collecting, full flips Collecting to Acting. Partial cargo never
/// switches, so drones finish what they started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Collecting,
    Acting,
}

/// Persisted per-drone memory, round-tripped verbatim by the driver
/// between ticks. The only durable contract of the crate.
///
/// Written by the drone's own policy, and by the Spawner's routing
/// directive for `refill_duty`. Nothing else touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneMemory {
    pub role: Role,
    pub mode: Mode,
    #[serde(default)]
    pub refill_duty: bool,
}

impl DroneMemory {
    pub fn new(role: Role) -> Self {
        Self { role, mode: Mode::Collecting, refill_duty: false }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One drone as the snapshot sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneState {
    pub id: DroneId,
    pub name: String,
    pub pos: Position,
    pub loadout: Vec<Part>,
    pub cargo: Store,
    /// Tick-start view of this drone's memory. The policy for the
    /// drone itself receives the authoritative copy mutably.
    pub memory: DroneMemory,
}

impl DroneState {
    pub fn new(name: &str, role: Role, pos: Position, loadout: Vec<Part>) -> Self {
        let capacity = cargo_capacity(&loadout);
        Self {
            id: DroneId::new(),
            name: name.to_string(),
            pos,
            loadout,
            cargo: Store::empty(capacity),
            memory: DroneMemory::new(role),
        }
    }
}
