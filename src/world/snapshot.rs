//! Read-only per-tick world view
//!
//! The driver assembles one of these each tick and passes it by
//! reference into the Spawner and every role policy. No component
//! reads ambient state; everything decides off this value.

use crate::agent::DroneState;
use crate::core::types::{DroneId, Position, Tick};
use crate::production::facility::Fabricator;
use crate::world::objects::{ConstructionSite, Deposit, Lode, Structure, StructureKind};
use crate::world::terrain::TerrainGrid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: Tick,
    pub terrain: TerrainGrid,
    pub structures: Vec<Structure>,
    pub sites: Vec<ConstructionSite>,
    pub deposits: Vec<Deposit>,
    pub lodes: Vec<Lode>,
    pub fabricators: Vec<Fabricator>,
    pub drones: Vec<DroneState>,
}

impl WorldSnapshot {
    pub fn new(tick: Tick, terrain: TerrainGrid) -> Self {
        Self {
            tick,
            terrain,
            structures: Vec::new(),
            sites: Vec::new(),
            deposits: Vec::new(),
            lodes: Vec::new(),
            fabricators: Vec::new(),
            drones: Vec::new(),
        }
    }

    pub fn structures_of_kind(&self, kind: StructureKind) -> impl Iterator<Item = &Structure> {
        self.structures.iter().filter(move |s| s.kind == kind)
    }

    /// First structure on the tile, in snapshot order
    pub fn structure_at(&self, pos: Position) -> Option<&Structure> {
        self.structures.iter().find(|s| s.pos == pos)
    }

    pub fn site_at(&self, pos: Position) -> Option<&ConstructionSite> {
        self.sites.iter().find(|s| s.pos == pos)
    }

    /// A drone on the tile other than the one asking
    pub fn other_drone_at(&self, pos: Position, asking: DroneId) -> Option<&DroneState> {
        self.drones.iter().find(|d| d.pos == pos && d.id != asking)
    }

    pub fn nexus(&self) -> Option<&Structure> {
        self.structures_of_kind(StructureKind::Nexus).next()
    }

    pub fn nearest_fabricator(&self, from: Position) -> Option<&Fabricator> {
        nearest_by_range(from, self.fabricators.iter(), |f| f.pos)
    }

    pub fn silo_count(&self) -> u32 {
        self.structures_of_kind(StructureKind::Silo).count() as u32
    }

    /// Ore banked toward production: fabricator stores plus silos
    pub fn ore_available(&self) -> u32 {
        let fabricator_ore: u32 = self.fabricators.iter().map(|f| f.store.ore).sum();
        let silo_ore: u32 = self.structures_of_kind(StructureKind::Silo).map(|s| s.store.ore).sum();
        fabricator_ore + silo_ore
    }

    pub fn ore_capacity(&self) -> u32 {
        let fabricator_cap: u32 = self.fabricators.iter().map(|f| f.store.capacity).sum();
        let silo_cap: u32 =
            self.structures_of_kind(StructureKind::Silo).map(|s| s.store.capacity).sum();
        fabricator_cap + silo_cap
    }
}

/// Nearest item by Chebyshev range; ties keep the earlier item.
pub fn nearest_by_range<'a, T>(
    from: Position,
    items: impl Iterator<Item = &'a T>,
    pos_of: impl Fn(&T) -> Position,
) -> Option<&'a T> {
    let mut best: Option<(u32, &T)> = None;
    for item in items {
        let range = from.range_to(pos_of(item));
        match best {
            Some((best_range, _)) if best_range <= range => {}
            _ => best = Some((range, item)),
        }
    }
    best.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::objects::Store;

    fn snapshot_with_structures(structures: Vec<Structure>) -> WorldSnapshot {
        let mut world = WorldSnapshot::new(1, TerrainGrid::open(20, 20));
        world.structures = structures;
        world
    }

    #[test]
    fn test_structure_at_finds_first() {
        let world = snapshot_with_structures(vec![
            Structure::new(StructureKind::Road, Position::new(3, 3), 500, 500),
            Structure::new(StructureKind::Wall, Position::new(5, 5), 100, 100),
        ]);
        assert_eq!(world.structure_at(Position::new(3, 3)).map(|s| s.kind), Some(StructureKind::Road));
        assert!(world.structure_at(Position::new(4, 4)).is_none());
    }

    #[test]
    fn test_budget_sums_fabricators_and_silos() {
        let mut world = snapshot_with_structures(vec![
            Structure::new(StructureKind::Silo, Position::new(1, 1), 100, 100),
            Structure::new(StructureKind::Container, Position::new(2, 2), 100, 100),
        ]);
        world.structures[0].store = Store::with_ore(30, 50);
        world.structures[1].store = Store::with_ore(900, 2_000); // containers do not count
        let mut fabricator = Fabricator::new(Position::new(0, 0));
        fabricator.store = Store::with_ore(250, 300);
        world.fabricators.push(fabricator);

        assert_eq!(world.ore_available(), 280);
        assert_eq!(world.ore_capacity(), 350);
        assert_eq!(world.silo_count(), 1);
    }

    #[test]
    fn test_nearest_fabricator_by_range() {
        let mut world = WorldSnapshot::new(1, TerrainGrid::open(20, 20));
        world.fabricators.push(Fabricator::new(Position::new(15, 15)));
        world.fabricators.push(Fabricator::new(Position::new(2, 2)));
        let nearest = world.nearest_fabricator(Position::new(0, 0)).unwrap();
        assert_eq!(nearest.pos, Position::new(2, 2));
    }

    #[test]
    fn test_nearest_by_range_tie_keeps_first() {
        let points = vec![Position::new(0, 4), Position::new(4, 0)];
        let nearest = nearest_by_range(Position::new(0, 0), points.iter(), |p| *p);
        assert_eq!(nearest, Some(&Position::new(0, 4)));
    }

    #[test]
    fn test_other_drone_at_skips_self() {
        use crate::agent::Part;
        use crate::core::types::Role;
        let mut world = WorldSnapshot::new(1, TerrainGrid::open(20, 20));
        world.drones.push(DroneState::new(
            "builder-1",
            Role::Builder,
            Position::new(4, 4),
            vec![Part::Tool, Part::Hold, Part::Servo],
        ));
        let me = world.drones[0].id;
        assert!(world.other_drone_at(Position::new(4, 4), me).is_none());
        assert!(world.other_drone_at(Position::new(4, 4), DroneId::new()).is_some());
    }
}
