//! Fabricator state and the one-slot production queue

use crate::agent::parts::{loadout_cost, Part};
use crate::agent::DroneMemory;
use crate::core::types::{Position, Role, StructureId, Tick};
use crate::world::objects::Store;
use serde::{Deserialize, Serialize};

/// Ore a fabricator banks on its own, before silos
pub const FABRICATOR_STORE_CAPACITY: u32 = 300;

/// One admitted drone waiting for (or mid) assembly.
///
/// The queue holds at most one of these; the admission policy never
/// fires while the slot is occupied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    pub name: String,
    pub role: Role,
    pub loadout: Vec<Part>,
    pub memory: DroneMemory,
}

impl ProductionRequest {
    pub fn new(role: Role, loadout: Vec<Part>, tick: Tick) -> Self {
        Self {
            name: format!("{}-{}", role.name(), tick),
            role,
            loadout,
            memory: DroneMemory::new(role),
        }
    }

    pub fn cost(&self) -> u32 {
        loadout_cost(&self.loadout)
    }
}

/// Production facility as the snapshot sees it.
///
/// The driver owns the assembly lifecycle (progress, emergence of the
/// finished drone, clearing the slot); this core reads the slot to
/// gate admission and to report the banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fabricator {
    pub id: StructureId,
    pub pos: Position,
    pub store: Store,
    pub queue: Option<ProductionRequest>,
}

impl Fabricator {
    pub fn new(pos: Position) -> Self {
        Self {
            id: StructureId::new(),
            pos,
            store: Store::empty(FABRICATOR_STORE_CAPACITY),
            queue: None,
        }
    }

    pub fn is_producing(&self) -> bool {
        self.queue.is_some()
    }

    pub fn in_flight_name(&self) -> Option<&str> {
        self.queue.as_ref().map(|request| request.name.as_str())
    }
}
