//! Shared behavior library - atomic decision steps policies compose
//!
//! Every step returns `Option<Action>`: `Some` means the step claimed
//! the tick and the chain stops there; `None` means no eligible target
//! and the policy falls through to its next step. Steps check range
//! themselves and emit a move toward the chosen target when too far.

pub mod construct;
pub mod logistics;
pub mod movement;

pub use construct::{build_priority, repair_priority, upgrade_nexus};
pub use logistics::{
    collect_ground, deposit_to_container, deposit_to_fabricator, deposit_to_silos,
    deposit_to_warehouse, extract_lode, feed_turrets, refill_silos, scope_for, withdraw_stored,
    CollectScope,
};
pub use movement::{reposition_off_road, road_site_here};

use crate::actions::Action;
use crate::agent::DroneState;
use crate::core::types::Position;
use crate::world::nav::Navigator;
use crate::world::snapshot::WorldSnapshot;

/// Context handed to every behavior step
pub struct BehaviorCtx<'a> {
    pub world: &'a WorldSnapshot,
    pub drone: &'a DroneState,
    pub nav: &'a dyn Navigator,
}

impl<'a> BehaviorCtx<'a> {
    pub fn new(world: &'a WorldSnapshot, drone: &'a DroneState, nav: &'a dyn Navigator) -> Self {
        Self { world, drone, nav }
    }

    /// Act when the target is close enough, otherwise close distance.
    pub fn engage(&self, range: u32, target: Position, action: Action) -> Action {
        if self.drone.pos.range_to(target) <= range {
            action
        } else {
            Action::MoveToward { target }
        }
    }
}
