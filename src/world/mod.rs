//! World state types and the per-tick snapshot

pub mod nav;
pub mod objects;
pub mod snapshot;
pub mod terrain;

pub use nav::{DirectPath, Navigator};
pub use objects::{ConstructionSite, Deposit, Lode, Store, Structure, StructureKind};
pub use snapshot::WorldSnapshot;
pub use terrain::{Terrain, TerrainGrid};
