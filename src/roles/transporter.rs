//! Transporter policy: move ore from the field into the colony's
//! stores, with a fast path for the fabricator refill assignment.

use crate::actions::Decision;
use crate::agent::{DroneMemory, Mode};
use crate::behavior::{
    collect_ground, deposit_to_fabricator, deposit_to_silos, deposit_to_warehouse, feed_turrets,
    reposition_off_road, withdraw_stored, BehaviorCtx, CollectScope,
};
use crate::roles::{sow_on_travel, switch_mode};

/// One tick of transporter behavior.
///
/// A drone holding the refill assignment serves the fabricator and its
/// silos ahead of everything else, restocking from bulk stores when
/// empty-handed. Everyone else runs the plain haul loop: fill up
/// anywhere, then drain into fabricators, silos, turrets, and finally
/// the warehouse.
pub fn decide(ctx: &BehaviorCtx, memory: &mut DroneMemory) -> Decision {
    let say = switch_mode(&ctx.drone.cargo, memory, "haul");

    if memory.refill_duty {
        let express = if ctx.drone.cargo.is_empty() {
            withdraw_stored(ctx)
        } else {
            deposit_to_fabricator(ctx).or_else(|| deposit_to_silos(ctx))
        };
        if express.is_some() {
            return Decision { action: express, say, road_site: sow_on_travel(ctx, express) };
        }
    }

    let action = match memory.mode {
        Mode::Acting => deposit_to_fabricator(ctx)
            .or_else(|| deposit_to_silos(ctx))
            .or_else(|| feed_turrets(ctx))
            .or_else(|| deposit_to_warehouse(ctx))
            .or_else(|| reposition_off_road(ctx)),
        Mode::Collecting => collect_ground(ctx, CollectScope::Anywhere)
            .or_else(|| withdraw_stored(ctx))
            .or_else(|| reposition_off_road(ctx)),
    };

    Decision { action, say, road_site: sow_on_travel(ctx, action) }
}
