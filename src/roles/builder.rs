//! Builder policy: raise construction sites, keep the colony topped
//! up when there is nothing to build.

use crate::actions::Decision;
use crate::agent::{DroneMemory, Mode};
use crate::behavior::{
    build_priority, collect_ground, feed_turrets, refill_silos, reposition_off_road, upgrade_nexus,
    withdraw_stored, BehaviorCtx, CollectScope,
};
use crate::roles::switch_mode;

/// One tick of builder behavior. Acting spends cargo on sites, then
/// falls back through silo refills, turret feeding, and nexus upgrades
/// before decluttering. Collecting scavenges locally around the
/// fabricator so distant drops stay with the transporters.
pub fn decide(ctx: &BehaviorCtx, memory: &mut DroneMemory) -> Decision {
    let say = switch_mode(&ctx.drone.cargo, memory, "build");

    let action = match memory.mode {
        Mode::Acting => build_priority(ctx)
            .or_else(|| refill_silos(ctx))
            .or_else(|| feed_turrets(ctx))
            .or_else(|| upgrade_nexus(ctx))
            .or_else(|| reposition_off_road(ctx)),
        Mode::Collecting => collect_ground(ctx, CollectScope::Local)
            .or_else(|| withdraw_stored(ctx))
            .or_else(|| reposition_off_road(ctx)),
    };

    Decision { action, say, road_site: None }
}
