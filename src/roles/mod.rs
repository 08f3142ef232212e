//! Per-role decision policies
//!
//! One policy per [`Role`], each a strict priority chain over the
//! behavior library. The dispatcher matches on the role tag in the
//! drone's memory; the policy returns a [`Decision`] and may flip the
//! drone's mode. Nothing here touches the world directly.

pub mod builder;
pub mod extractor;
pub mod repairer;
pub mod transporter;
pub mod upgrader;

use crate::actions::{Action, Decision};
use crate::agent::{DroneMemory, DroneState, Mode};
use crate::behavior::{road_site_here, BehaviorCtx};
use crate::core::types::{Position, Role};
use crate::world::nav::Navigator;
use crate::world::objects::Store;
use crate::world::snapshot::WorldSnapshot;

/// Run one drone's policy for this tick.
///
/// `drone` is the snapshot view; `memory` is the authoritative copy
/// the driver persists afterwards. Mode flips land in `memory` before
/// the decision chain runs, so a drone that just filled up acts on the
/// new mode the same tick.
pub fn run(
    world: &WorldSnapshot,
    nav: &dyn Navigator,
    drone: &DroneState,
    memory: &mut DroneMemory,
) -> Decision {
    let ctx = BehaviorCtx::new(world, drone, nav);
    match memory.role {
        Role::Extractor => extractor::decide(&ctx),
        Role::Transporter => transporter::decide(&ctx, memory),
        Role::Upgrader => upgrader::decide(&ctx, memory),
        Role::Builder => builder::decide(&ctx, memory),
        Role::Repairer => repairer::decide(&ctx, memory),
    }
}

/// Flip the mode at cargo extremes, nowhere else.
///
/// Acting with an empty hold falls back to Collecting; Collecting with
/// no free capacity goes to work. Partial cargo never switches, so a
/// drone finishes the trip it started. Returns the announcement for
/// the flip tick.
pub fn switch_mode(
    cargo: &Store,
    memory: &mut DroneMemory,
    acting_verb: &'static str,
) -> Option<&'static str> {
    match memory.mode {
        Mode::Acting if cargo.is_empty() => {
            memory.mode = Mode::Collecting;
            Some("collect")
        }
        Mode::Collecting if cargo.is_full() => {
            memory.mode = Mode::Acting;
            Some(acting_verb)
        }
        _ => None,
    }
}

/// Roads get sown under travel, not under parked or decluttering
/// drones. Only the hauling roles call this.
fn sow_on_travel(ctx: &BehaviorCtx, action: Option<Action>) -> Option<Position> {
    match action {
        Some(Action::MoveToward { .. }) => road_site_here(ctx),
        _ => None,
    }
}
