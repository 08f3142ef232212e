//! Extractor policy: park at a lode, work it, empty the hold into the
//! nearest container.
//!
//! No mode switch here. Cargo fullness is checked directly each tick,
//! which is enough when the whole job is a two-stop shuttle.

use crate::actions::Decision;
use crate::behavior::{deposit_to_container, extract_lode, reposition_off_road, BehaviorCtx};
use crate::roles::sow_on_travel;

pub fn decide(ctx: &BehaviorCtx) -> Decision {
    // A hold-less extractor (the production policy builds these) can
    // never fill up: it parks at the lode and mines every tick, ore
    // spilling to the ground for the haulers. A zero-capacity store
    // reads as full, so the capacity gate must come first.
    let hold_full = ctx.drone.cargo.capacity > 0 && ctx.drone.cargo.is_full();
    let action = if hold_full {
        deposit_to_container(ctx).or_else(|| reposition_off_road(ctx))
    } else {
        extract_lode(ctx)
    };

    Decision { action, say: None, road_site: sow_on_travel(ctx, action) }
}
