//! Construction, repair, and upgrade steps

use crate::actions::Action;
use crate::behavior::BehaviorCtx;
use crate::core::config::{BULWARK_MATURITY, WORK_RANGE};
use crate::world::objects::{ConstructionSite, Structure, StructureKind};

/// Priority construction. Silo sites always come first; everything
/// else competes on `range + remaining progress` ascending. Bulwark
/// sites past the maturity gate get no further build attention.
pub fn build_priority(ctx: &BehaviorCtx) -> Option<Action> {
    let eligible: Vec<&ConstructionSite> = ctx
        .world
        .sites
        .iter()
        .filter(|site| site.kind != StructureKind::Bulwark || site.hits <= BULWARK_MATURITY)
        .collect();

    let mut silos: Vec<&ConstructionSite> =
        eligible.iter().copied().filter(|site| site.kind == StructureKind::Silo).collect();
    silos.sort_by_key(|site| build_score(ctx, site));
    if let Some(site) = silos.first() {
        return Some(ctx.engage(WORK_RANGE, site.pos, Action::Build { site: site.id }));
    }

    let mut rest = eligible;
    rest.sort_by_key(|site| build_score(ctx, site));
    rest.first().map(|site| ctx.engage(WORK_RANGE, site.pos, Action::Build { site: site.id }))
}

fn build_score(ctx: &BehaviorCtx, site: &ConstructionSite) -> u32 {
    ctx.drone.pos.range_to(site.pos) + site.remaining()
}

/// Most-damaged-first repair. Walls are never candidates; bulwarks
/// only once past the maturity gate. Road wear yields to any other
/// structure below half health.
pub fn repair_priority(ctx: &BehaviorCtx) -> Option<Action> {
    let mut candidates: Vec<&Structure> = ctx
        .world
        .structures
        .iter()
        .filter(|s| s.is_damaged() && s.kind != StructureKind::Wall)
        .filter(|s| s.kind != StructureKind::Bulwark || s.hits > BULWARK_MATURITY)
        .collect();
    candidates.sort_by_key(|s| s.hits);

    let urgent: Vec<&Structure> = candidates
        .iter()
        .copied()
        .filter(|s| s.kind != StructureKind::Road && s.hits < s.hits_max / 2)
        .collect();
    let queue = if urgent.is_empty() { candidates } else { urgent };

    queue
        .first()
        .map(|target| ctx.engage(WORK_RANGE, target.pos, Action::Repair { structure: target.id }))
}

/// Feed the nexus. Succeeds whenever the colony has one.
pub fn upgrade_nexus(ctx: &BehaviorCtx) -> Option<Action> {
    let nexus = ctx.world.nexus()?;
    Some(ctx.engage(WORK_RANGE, nexus.pos, Action::Upgrade { nexus: nexus.id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{DroneState, Part};
    use crate::core::types::{Position, Role};
    use crate::world::nav::DirectPath;
    use crate::world::objects::Store;
    use crate::world::snapshot::WorldSnapshot;
    use crate::world::terrain::TerrainGrid;

    fn worker_at(pos: Position) -> DroneState {
        let mut drone = DroneState::new(
            "builder-1",
            Role::Builder,
            pos,
            vec![Part::Tool, Part::Hold, Part::Servo],
        );
        drone.cargo = Store::with_ore(50, 50);
        drone
    }

    fn empty_world() -> WorldSnapshot {
        WorldSnapshot::new(1, TerrainGrid::open(30, 30))
    }

    #[test]
    fn test_no_sites_no_action() {
        let world = empty_world();
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);
        assert_eq!(build_priority(&ctx), None);
    }

    #[test]
    fn test_silo_site_beats_better_scored_ordinary_site() {
        let mut world = empty_world();
        // ordinary site scores 1 + 10 = 11, silo scores 5 + 40 = 45
        world.sites.push(ConstructionSite::new(
            StructureKind::Road,
            Position::new(6, 5),
            0,
            10,
        ));
        world.sites.push(ConstructionSite::new(
            StructureKind::Silo,
            Position::new(10, 5),
            10,
            50,
        ));
        let silo_id = world.sites[1].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(build_priority(&ctx), Some(Action::Build { site: silo_id }));
    }

    #[test]
    fn test_ordinary_sites_scored_by_range_plus_remaining() {
        let mut world = empty_world();
        // near but barely started: 2 + 90 = 92
        world.sites.push(ConstructionSite::new(
            StructureKind::Wall,
            Position::new(7, 5),
            10,
            100,
        ));
        // farther but nearly done: 6 + 5 = 11
        world.sites.push(ConstructionSite::new(
            StructureKind::Wall,
            Position::new(11, 5),
            95,
            100,
        ));
        let almost_done = world.sites[1].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(build_priority(&ctx), Some(Action::Build { site: almost_done }));
    }

    #[test]
    fn test_mature_bulwark_site_skipped() {
        let mut world = empty_world();
        let mut rampart = ConstructionSite::new(StructureKind::Bulwark, Position::new(6, 5), 5, 10);
        rampart.hits = BULWARK_MATURITY + 1;
        world.sites.push(rampart);
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(build_priority(&ctx), None);
    }

    #[test]
    fn test_young_bulwark_site_still_built() {
        let mut world = empty_world();
        let mut rampart = ConstructionSite::new(StructureKind::Bulwark, Position::new(6, 5), 5, 10);
        rampart.hits = BULWARK_MATURITY;
        world.sites.push(rampart);
        let site_id = world.sites[0].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(build_priority(&ctx), Some(Action::Build { site: site_id }));
    }

    #[test]
    fn test_build_moves_when_out_of_work_range() {
        let mut world = empty_world();
        world.sites.push(ConstructionSite::new(StructureKind::Road, Position::new(20, 5), 0, 10));
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(
            build_priority(&ctx),
            Some(Action::MoveToward { target: Position::new(20, 5) })
        );
    }

    #[test]
    fn test_repair_picks_most_damaged() {
        let mut world = empty_world();
        world.structures.push(Structure::new(StructureKind::Turret, Position::new(6, 5), 900, 1_000));
        world.structures.push(Structure::new(StructureKind::Turret, Position::new(7, 5), 300, 1_000));
        let battered = world.structures[1].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(repair_priority(&ctx), Some(Action::Repair { structure: battered }));
    }

    #[test]
    fn test_walls_never_repaired() {
        let mut world = empty_world();
        world.structures.push(Structure::new(StructureKind::Wall, Position::new(6, 5), 1, 10_000));
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(repair_priority(&ctx), None);
    }

    #[test]
    fn test_low_bulwark_protected_from_repair() {
        let mut world = empty_world();
        world.structures.push(Structure::new(
            StructureKind::Bulwark,
            Position::new(6, 5),
            BULWARK_MATURITY,
            300_000,
        ));
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(repair_priority(&ctx), None);
    }

    #[test]
    fn test_mature_bulwark_eligible_for_repair() {
        let mut world = empty_world();
        world.structures.push(Structure::new(
            StructureKind::Bulwark,
            Position::new(6, 5),
            BULWARK_MATURITY + 1,
            300_000,
        ));
        let bulwark = world.structures[0].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(repair_priority(&ctx), Some(Action::Repair { structure: bulwark }));
    }

    #[test]
    fn test_worn_road_yields_to_half_damaged_structure() {
        let mut world = empty_world();
        // road is the most damaged overall, but the turret sits below half
        world.structures.push(Structure::new(StructureKind::Road, Position::new(6, 5), 10, 5_000));
        world.structures.push(Structure::new(StructureKind::Turret, Position::new(7, 5), 400, 1_000));
        let turret = world.structures[1].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(repair_priority(&ctx), Some(Action::Repair { structure: turret }));
    }

    #[test]
    fn test_road_repaired_when_nothing_urgent() {
        let mut world = empty_world();
        world.structures.push(Structure::new(StructureKind::Road, Position::new(6, 5), 10, 5_000));
        world.structures.push(Structure::new(StructureKind::Turret, Position::new(7, 5), 800, 1_000));
        let road = world.structures[0].id;
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);

        assert_eq!(repair_priority(&ctx), Some(Action::Repair { structure: road }));
    }

    #[test]
    fn test_upgrade_requires_nexus() {
        let world = empty_world();
        let drone = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &drone, &DirectPath);
        assert_eq!(upgrade_nexus(&ctx), None);
    }

    #[test]
    fn test_upgrade_in_range_and_beyond() {
        let mut world = empty_world();
        world.structures.push(Structure::new(StructureKind::Nexus, Position::new(8, 5), 1, 1));
        let nexus = world.structures[0].id;

        let near = worker_at(Position::new(5, 5));
        let ctx = BehaviorCtx::new(&world, &near, &DirectPath);
        assert_eq!(upgrade_nexus(&ctx), Some(Action::Upgrade { nexus }));

        let far = worker_at(Position::new(0, 5));
        let ctx = BehaviorCtx::new(&world, &far, &DirectPath);
        assert_eq!(upgrade_nexus(&ctx), Some(Action::MoveToward { target: Position::new(8, 5) }));
    }
}
