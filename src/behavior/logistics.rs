//! Ore movement: extraction, scavenging, withdrawal, and the deposit
//! family

use std::cmp::Reverse;

use crate::actions::Action;
use crate::behavior::BehaviorCtx;
use crate::core::config::{INTERACT_RANGE, LOCAL_SCAVENGE_RANGE, TURRET_REFILL_SLACK};
use crate::core::types::Role;
use crate::world::nav::nearest_by_path;
use crate::world::objects::{Deposit, Structure, StructureKind};
use crate::world::snapshot::nearest_by_range;

/// Work the nearest lode by path that still has ore in it.
pub fn extract_lode(ctx: &BehaviorCtx) -> Option<Action> {
    let active = ctx.world.lodes.iter().filter(|l| l.remaining > 0);
    let lode = nearest_by_path(ctx.nav, ctx.drone.pos, active, |l| l.pos)?;
    Some(ctx.engage(INTERACT_RANGE, lode.pos, Action::Extract { lode: lode.id }))
}

/// Where ground scavenging may roam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectScope {
    /// Only deposits strictly closer than the scavenge range to the
    /// fabricator nearest the drone
    Local,
    Anywhere,
}

/// Scope per role: worker roles stay near the fabricator so they do
/// not race transporters to distant drops.
pub fn scope_for(role: Role) -> CollectScope {
    match role {
        Role::Builder | Role::Repairer | Role::Upgrader => CollectScope::Local,
        Role::Extractor | Role::Transporter => CollectScope::Anywhere,
    }
}

/// Ground pickup. A closest deposit too big to fit is taken as-is
/// (no point shopping around); otherwise the largest in scope wins.
pub fn collect_ground(ctx: &BehaviorCtx, scope: CollectScope) -> Option<Action> {
    let mut deposits: Vec<&Deposit> = ctx.world.deposits.iter().collect();
    if scope == CollectScope::Local {
        let fabricator = ctx.world.nearest_fabricator(ctx.drone.pos)?;
        deposits.retain(|d| fabricator.pos.range_to(d.pos) < LOCAL_SCAVENGE_RANGE);
    }

    let closest = nearest_by_range(ctx.drone.pos, deposits.iter().copied(), |d| d.pos)?;
    let target = if closest.amount > ctx.drone.cargo.free_capacity() {
        closest
    } else {
        deposits.sort_by_key(|d| Reverse(d.amount));
        deposits.first().copied()?
    };

    Some(ctx.engage(INTERACT_RANGE, target.pos, Action::Pickup { deposit: target.id }))
}

/// Withdraw from the nearest stocked container or warehouse by path.
pub fn withdraw_stored(ctx: &BehaviorCtx) -> Option<Action> {
    let stocked = ctx.world.structures.iter().filter(|s| s.kind.is_bulk_store() && s.store.ore > 0);
    let target = nearest_by_path(ctx.nav, ctx.drone.pos, stocked, |s| s.pos)?;
    Some(ctx.engage(INTERACT_RANGE, target.pos, Action::Withdraw { structure: target.id }))
}

/// Keep silos topped up: transfer held ore to the first needy silo in
/// snapshot order, or restock from bulk stores when empty-handed.
pub fn refill_silos(ctx: &BehaviorCtx) -> Option<Action> {
    let needy = ctx
        .world
        .structures
        .iter()
        .find(|s| s.kind == StructureKind::Silo && s.store.free_capacity() > 0)?;

    if !ctx.drone.cargo.is_empty() {
        Some(ctx.engage(INTERACT_RANGE, needy.pos, Action::Transfer { structure: needy.id }))
    } else {
        withdraw_stored(ctx)
    }
}

/// Top up turrets running more than the slack below capacity, fullest
/// first. Empty-handed feeders restock from bulk stores, then the
/// ground.
pub fn feed_turrets(ctx: &BehaviorCtx) -> Option<Action> {
    let mut hungry: Vec<&Structure> = ctx
        .world
        .structures
        .iter()
        .filter(|s| s.kind == StructureKind::Turret && s.store.free_capacity() > TURRET_REFILL_SLACK)
        .collect();
    if hungry.is_empty() {
        return None;
    }

    if ctx.drone.cargo.is_empty() {
        if let Some(action) = withdraw_stored(ctx) {
            return Some(action);
        }
        return collect_ground(ctx, scope_for(ctx.drone.memory.role));
    }

    hungry.sort_by_key(|s| s.store.free_capacity());
    hungry
        .first()
        .map(|target| ctx.engage(INTERACT_RANGE, target.pos, Action::Transfer { structure: target.id }))
}

/// Deliver to the nearest fabricator with room.
pub fn deposit_to_fabricator(ctx: &BehaviorCtx) -> Option<Action> {
    let open = ctx.world.fabricators.iter().filter(|f| f.store.free_capacity() > 0);
    let target = nearest_by_range(ctx.drone.pos, open, |f| f.pos)?;
    Some(ctx.engage(INTERACT_RANGE, target.pos, Action::Transfer { structure: target.id }))
}

/// Deliver to the nearest silo with room.
pub fn deposit_to_silos(ctx: &BehaviorCtx) -> Option<Action> {
    let open = ctx
        .world
        .structures
        .iter()
        .filter(|s| s.kind == StructureKind::Silo && s.store.free_capacity() > 0);
    let target = nearest_by_range(ctx.drone.pos, open, |s| s.pos)?;
    Some(ctx.engage(INTERACT_RANGE, target.pos, Action::Transfer { structure: target.id }))
}

/// Deliver to the nearest container with room, by path.
pub fn deposit_to_container(ctx: &BehaviorCtx) -> Option<Action> {
    let open = ctx
        .world
        .structures
        .iter()
        .filter(|s| s.kind == StructureKind::Container && s.store.free_capacity() > 0);
    let target = nearest_by_path(ctx.nav, ctx.drone.pos, open, |s| s.pos)?;
    Some(ctx.engage(INTERACT_RANGE, target.pos, Action::Transfer { structure: target.id }))
}

/// Deliver to the nearest warehouse with room.
pub fn deposit_to_warehouse(ctx: &BehaviorCtx) -> Option<Action> {
    let open = ctx
        .world
        .structures
        .iter()
        .filter(|s| s.kind == StructureKind::Warehouse && s.store.free_capacity() > 0);
    let target = nearest_by_range(ctx.drone.pos, open, |s| s.pos)?;
    Some(ctx.engage(INTERACT_RANGE, target.pos, Action::Transfer { structure: target.id }))
}
