//! Production control: population census, budget window, admission,
//! loadout sizing, and the fabricator refill routing flag.

pub mod facility;
pub mod loadout;

pub use facility::{Fabricator, ProductionRequest, FABRICATOR_STORE_CAPACITY};
pub use loadout::size_loadout;

use crate::core::config::{
    BASE_BUILD_FLOOR, BUILDER_TARGET, EXTRACTOR_BUILD_CEILING, REPAIRER_TARGET, SILO_BUDGET_STEP,
    TRANSPORTER_TARGET, UPGRADER_TARGET,
};
use crate::core::types::{DroneId, Role};
use crate::world::snapshot::WorldSnapshot;

/// Population counts per role, taken once per tick.
///
/// Counts emerged drones only. A drone mid-assembly is covered by the
/// occupied queue slot, which blocks admission on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCensus {
    counts: [u32; 5],
}

impl RoleCensus {
    pub fn take(world: &WorldSnapshot) -> Self {
        let mut census = Self::default();
        for drone in &world.drones {
            census.counts[drone.memory.role as usize] += 1;
        }
        census
    }

    pub fn of(&self, role: Role) -> u32 {
        self.counts[role as usize]
    }
}

/// Admission thresholds derived from the silo count.
///
/// Every silo raises both bounds; `min_build` trails `max_build` so a
/// partly stocked colony still produces. When the economy is gone
/// (no extractors, no transporters) `min_build` drops to the bare
/// floor so one recovery drone can always be afforded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWindow {
    pub min_build: u32,
    pub max_build: u32,
}

impl BudgetWindow {
    pub fn derive(silos: u32, census: &RoleCensus) -> Self {
        let collapsed =
            census.of(Role::Extractor) == 0 && census.of(Role::Transporter) == 0;
        let min_build = if collapsed {
            BASE_BUILD_FLOOR
        } else {
            BASE_BUILD_FLOOR + SILO_BUDGET_STEP * silos * 2 / 3
        };
        let max_build = BASE_BUILD_FLOOR + SILO_BUDGET_STEP * silos;
        Self { min_build, max_build }
    }
}

/// Memory mutation the driver applies for the refill flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDirective {
    Assign(DroneId),
    Clear(DroneId),
}

/// Everything the Spawner decided this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnerOutput {
    /// At most one new drone per tick
    pub admission: Option<ProductionRequest>,
    pub routing: Option<RoutingDirective>,
    /// Annotation for the facility while assembly is under way
    pub banner: Option<String>,
}

/// Per-tick production controller.
///
/// Built fresh each tick from the snapshot and the facility it
/// manages; all counting happens once, in `new`.
pub struct Spawner<'a> {
    world: &'a WorldSnapshot,
    facility: &'a Fabricator,
    census: RoleCensus,
    budget: BudgetWindow,
    lode_count: u32,
    ore_available: u32,
    ore_capacity: u32,
}

impl<'a> Spawner<'a> {
    pub fn new(world: &'a WorldSnapshot, facility: &'a Fabricator) -> Self {
        let census = RoleCensus::take(world);
        let budget = BudgetWindow::derive(world.silo_count(), &census);
        Self {
            world,
            facility,
            census,
            budget,
            lode_count: world.lodes.len() as u32,
            ore_available: world.ore_available(),
            ore_capacity: world.ore_capacity(),
        }
    }

    pub fn census(&self) -> &RoleCensus {
        &self.census
    }

    pub fn budget(&self) -> BudgetWindow {
        self.budget
    }

    pub fn run(&self) -> SpawnerOutput {
        SpawnerOutput {
            admission: self.admit(),
            routing: self.route_refill(),
            banner: self.banner(),
        }
    }

    /// Admission chain: first matching rule wins, at most one
    /// admission per tick. The queue slot and the budget gate run
    /// before any role rule.
    fn admit(&self) -> Option<ProductionRequest> {
        if self.facility.is_producing() {
            return None;
        }
        if self.ore_available < self.budget.min_build {
            tracing::trace!(
                "Holding production: {} ore banked, {} needed",
                self.ore_available,
                self.budget.min_build
            );
            return None;
        }

        let role = self.next_role()?;
        let cap = if role == Role::Extractor {
            EXTRACTOR_BUILD_CEILING
        } else {
            self.budget.max_build
        };
        let loadout = size_loadout(role, self.ore_available.min(cap));
        let request = ProductionRequest::new(role, loadout, self.world.tick);
        tracing::debug!(
            "Admitting {} ({} parts, {} ore)",
            request.name,
            request.loadout.len(),
            request.cost()
        );
        Some(request)
    }

    /// Transporters need something to move, extraction is capped by
    /// the lode count, and the worker roles fill in afterwards at
    /// small fixed targets.
    fn next_role(&self) -> Option<Role> {
        let extractors = self.census.of(Role::Extractor);
        if extractors > 0 && self.census.of(Role::Transporter) < TRANSPORTER_TARGET {
            Some(Role::Transporter)
        } else if extractors < self.lode_count {
            Some(Role::Extractor)
        } else if self.census.of(Role::Builder) < BUILDER_TARGET {
            Some(Role::Builder)
        } else if self.census.of(Role::Repairer) < REPAIRER_TARGET {
            Some(Role::Repairer)
        } else if self.census.of(Role::Upgrader) < UPGRADER_TARGET {
            Some(Role::Upgrader)
        } else {
            None
        }
    }

    /// Keep exactly one transporter on refill duty while the budget
    /// window is below capacity; release it once the window is full.
    fn route_refill(&self) -> Option<RoutingDirective> {
        let holder = self.world.drones.iter().find(|d| d.memory.refill_duty);
        if self.ore_available < self.ore_capacity {
            if holder.is_some() {
                return None;
            }
            let hauler =
                self.world.drones.iter().find(|d| d.memory.role == Role::Transporter)?;
            tracing::debug!("Refill duty assigned to {}", hauler.name);
            Some(RoutingDirective::Assign(hauler.id))
        } else {
            let holder = holder?;
            tracing::debug!("Refill duty cleared from {}", holder.name);
            Some(RoutingDirective::Clear(holder.id))
        }
    }

    fn banner(&self) -> Option<String> {
        self.facility.in_flight_name().map(|name| format!("assembling {}", name))
    }
}
