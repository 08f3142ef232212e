//! Upgrader policy: pump cargo into the nexus, nothing else.

use crate::actions::Decision;
use crate::agent::{DroneMemory, Mode};
use crate::behavior::{
    collect_ground, reposition_off_road, upgrade_nexus, withdraw_stored, BehaviorCtx, CollectScope,
};
use crate::roles::switch_mode;

pub fn decide(ctx: &BehaviorCtx, memory: &mut DroneMemory) -> Decision {
    let say = switch_mode(&ctx.drone.cargo, memory, "upgrade");

    let action = match memory.mode {
        Mode::Acting => upgrade_nexus(ctx).or_else(|| reposition_off_road(ctx)),
        Mode::Collecting => collect_ground(ctx, CollectScope::Local)
            .or_else(|| withdraw_stored(ctx))
            .or_else(|| reposition_off_road(ctx)),
    };

    Decision { action, say, road_site: None }
}
