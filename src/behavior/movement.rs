//! Repositioning and road sowing

use ahash::AHashMap;

use crate::actions::Action;
use crate::behavior::BehaviorCtx;
use crate::core::types::{Direction, Position};
use crate::world::objects::StructureKind;
use crate::world::terrain::Terrain;

/// Idle declutter. Drones standing on a road stay where they are;
/// anywhere else the 3x3 neighborhood is scanned in fixed order and
/// the first acceptable tile wins. Own tile comes first, so a drone
/// on plain ground does not move at all.
pub fn reposition_off_road(ctx: &BehaviorCtx) -> Option<Action> {
    let pos = ctx.drone.pos;
    let underfoot = ctx.world.structure_at(pos).map(|s| s.kind);
    if underfoot == Some(StructureKind::Road) {
        return None;
    }

    let mut kind_at: AHashMap<Position, StructureKind> = AHashMap::new();
    for structure in &ctx.world.structures {
        kind_at.entry(structure.pos).or_insert(structure.kind);
    }

    for tile in neighborhood(pos) {
        if ctx.world.terrain.at(tile) == Terrain::Blocked {
            continue;
        }
        if underfoot.is_some() && kind_at.get(&tile) == underfoot.as_ref() {
            continue;
        }
        if ctx.world.other_drone_at(tile, ctx.drone.id).is_some() {
            continue;
        }
        if ctx.world.terrain.at(tile) == Terrain::Rubble {
            continue;
        }
        return pos.direction_to(tile).map(|dir| Action::Step { dir });
    }
    None
}

/// Own tile first, then cardinals, then diagonals
fn neighborhood(pos: Position) -> [Position; 9] {
    [
        pos,
        pos.step(Direction::West),
        pos.step(Direction::East),
        pos.step(Direction::North),
        pos.step(Direction::South),
        pos.step(Direction::NorthWest),
        pos.step(Direction::NorthEast),
        pos.step(Direction::SouthWest),
        pos.step(Direction::SouthEast),
    ]
}

/// Sow a road site under the drone when the tile has neither a
/// structure nor a site already.
pub fn road_site_here(ctx: &BehaviorCtx) -> Option<Position> {
    let pos = ctx.drone.pos;
    if ctx.world.structure_at(pos).is_none() && ctx.world.site_at(pos).is_none() {
        Some(pos)
    } else {
        None
    }
}
