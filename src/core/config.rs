//! Colony policy constants - all tunable values in one place
//!
//! Budget arithmetic is integer throughout; derived thresholds floor.

// === PRODUCTION BUDGET ===

/// Admission floor and collapse-recovery budget.
///
/// A fresh fabricator with no silos banks exactly this much, so the
/// colony can always afford one minimal drone after a wipe.
pub const BASE_BUILD_FLOOR: u32 = 300;

/// Threshold growth per silo. min_build rises at two thirds of this
/// per silo, max_build at the full step.
pub const SILO_BUDGET_STEP: u32 = 50;

/// Extractors clamp their loadout budget here instead of max_build.
/// Extraction throughput has diminishing per-unit returns past this.
pub const EXTRACTOR_BUILD_CEILING: u32 = 750;

// === ROLE POPULATION TARGETS ===
// Admission stops filling a role at its target; extractors instead
// track the lode count of the territory.

pub const TRANSPORTER_TARGET: u32 = 2;
pub const BUILDER_TARGET: u32 = 2;
pub const REPAIRER_TARGET: u32 = 1;
pub const UPGRADER_TARGET: u32 = 1;

// === INTERACTION GEOMETRY (Chebyshev tiles) ===

/// Extract, withdraw, transfer, pickup
pub const INTERACT_RANGE: u32 = 1;

/// Build, repair, upgrade
pub const WORK_RANGE: u32 = 3;

// === BEHAVIOR THRESHOLDS ===

/// Ground pickup for non-transport roles stays strictly closer than
/// this to the nearest fabricator, leaving distant drops to haulers.
pub const LOCAL_SCAVENGE_RANGE: u32 = 3;

/// Hits gate for bulwark eligibility: sites stop being built above it,
/// structures start being repaired above it.
pub const BULWARK_MATURITY: u32 = 50_000;

/// Turrets qualify for feeding only above this much free store,
/// so nearly-full turrets do not pull haulers off real work.
pub const TURRET_REFILL_SLACK: u32 = 200;
