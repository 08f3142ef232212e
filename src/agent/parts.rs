//! Capability parts and loadout arithmetic

use serde::{Deserialize, Serialize};

/// Cargo granted per Hold part
pub const HOLD_CAPACITY: u32 = 50;

/// One capability part of a drone loadout.
///
/// Order within a loadout matters: the engine resolves damage and
/// targeting front to back, so sizing patterns prepend or append
/// deliberately. The combat parts are never assigned by the
/// production policy but stay representable for engine parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    /// Movement
    Servo,
    /// Extraction, construction, repair, upgrade work
    Tool,
    /// Cargo capacity
    Hold,
    /// Melee
    Claw,
    /// Ranged
    Launcher,
    /// Healing
    Mender,
    /// Territory claim
    Beacon,
    /// Cheap padding armor
    Plate,
}

impl Part {
    pub fn cost(&self) -> u32 {
        match self {
            Part::Servo => 50,
            Part::Tool => 100,
            Part::Hold => 50,
            Part::Claw => 80,
            Part::Launcher => 150,
            Part::Mender => 250,
            Part::Beacon => 600,
            Part::Plate => 10,
        }
    }
}

pub fn loadout_cost(parts: &[Part]) -> u32 {
    parts.iter().map(|p| p.cost()).sum()
}

pub fn cargo_capacity(parts: &[Part]) -> u32 {
    parts.iter().filter(|p| **p == Part::Hold).count() as u32 * HOLD_CAPACITY
}
