//! Snapshot entities: structures, sites, deposits, lodes

use crate::core::types::{DepositId, LodeId, Position, SiteId, StructureId};
use serde::{Deserialize, Serialize};

/// Single-resource store. The colony tracks one resource, ore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub ore: u32,
    pub capacity: u32,
}

impl Store {
    pub fn empty(capacity: u32) -> Self {
        Self { ore: 0, capacity }
    }

    pub fn with_ore(ore: u32, capacity: u32) -> Self {
        Self { ore: ore.min(capacity), capacity }
    }

    pub fn free_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.ore)
    }

    pub fn is_empty(&self) -> bool {
        self.ore == 0
    }

    /// A zero-capacity store is both empty and full. Callers that
    /// branch on fullness for a drone that may lack holds (the
    /// extractor loadout has none) must gate on `capacity > 0` first;
    /// the modal roles are safe because their loadouts always carry
    /// at least one hold.
    pub fn is_full(&self) -> bool {
        self.free_capacity() == 0
    }
}

/// Buildable structure kinds.
///
/// Fabricators are not listed here: the facility lives in its own
/// snapshot slot (`WorldSnapshot::fabricators`) since it carries
/// production state no other structure has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Capacity-boosting store feeding the fabricator budget
    Silo,
    /// Field store filled by extractors
    Container,
    /// Bulk store
    Warehouse,
    /// Defensive active structure, fires on its own
    Turret,
    /// Defensive passive barrier, repair-hungry
    Bulwark,
    Wall,
    Road,
    /// Colony controller, target of the upgrade action
    Nexus,
}

impl StructureKind {
    pub fn store_capacity(&self) -> u32 {
        match self {
            StructureKind::Silo => 50,
            StructureKind::Container => 2_000,
            StructureKind::Warehouse => 100_000,
            StructureKind::Turret => 1_000,
            StructureKind::Bulwark
            | StructureKind::Wall
            | StructureKind::Road
            | StructureKind::Nexus => 0,
        }
    }

    /// Kinds drones withdraw from when scavenging finds nothing
    pub fn is_bulk_store(&self) -> bool {
        matches!(self, StructureKind::Container | StructureKind::Warehouse)
    }
}

/// A built structure as the snapshot sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    pub kind: StructureKind,
    pub pos: Position,
    pub hits: u32,
    pub hits_max: u32,
    pub store: Store,
}

impl Structure {
    pub fn new(kind: StructureKind, pos: Position, hits: u32, hits_max: u32) -> Self {
        Self {
            id: StructureId::new(),
            kind,
            pos,
            hits,
            hits_max,
            store: Store::empty(kind.store_capacity()),
        }
    }

    pub fn is_damaged(&self) -> bool {
        self.hits < self.hits_max
    }
}

/// An in-progress structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionSite {
    pub id: SiteId,
    pub kind: StructureKind,
    pub pos: Position,
    pub progress: u32,
    pub progress_total: u32,
    /// Durability accrued so far. Defensive works gain hits while
    /// building, which gates them out of further build attention.
    pub hits: u32,
}

impl ConstructionSite {
    pub fn new(kind: StructureKind, pos: Position, progress: u32, progress_total: u32) -> Self {
        Self { id: SiteId::new(), kind, pos, progress, progress_total, hits: 0 }
    }

    pub fn remaining(&self) -> u32 {
        self.progress_total.saturating_sub(self.progress)
    }
}

/// Loose ore lying on the ground
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deposit {
    pub id: DepositId,
    pub pos: Position,
    pub amount: u32,
}

impl Deposit {
    pub fn new(pos: Position, amount: u32) -> Self {
        Self { id: DepositId::new(), pos, amount }
    }
}

/// An ore source node worked by extractors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lode {
    pub id: LodeId,
    pub pos: Position,
    pub remaining: u32,
}

impl Lode {
    pub fn new(pos: Position, remaining: u32) -> Self {
        Self { id: LodeId::new(), pos, remaining }
    }
}
