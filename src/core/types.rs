//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simulation tick counter
pub type Tick = u64;

/// Unique identifier for drones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DroneId(pub u64);

impl DroneId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128() as u64)
    }
}

impl Default for DroneId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for built structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructureId(pub u64);

impl StructureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128() as u64)
    }
}

impl Default for StructureId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for construction sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(pub u64);

impl SiteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128() as u64)
    }
}

impl Default for SiteId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for ground ore deposits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositId(pub u64);

impl DepositId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128() as u64)
    }
}

impl Default for DepositId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for ore lodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LodeId(pub u64);

impl LodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128() as u64)
    }
}

impl Default for LodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Drone role: closed set, fixed at production time.
///
/// Drives both loadout shape and behavior-policy dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Extractor,
    Transporter,
    Upgrader,
    Builder,
    Repairer,
}

impl Role {
    pub const ALL: [Role; 5] =
        [Role::Extractor, Role::Transporter, Role::Upgrader, Role::Builder, Role::Repairer];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Extractor => "extractor",
            Role::Transporter => "transporter",
            Role::Upgrader => "upgrader",
            Role::Builder => "builder",
            Role::Repairer => "repairer",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = crate::core::error::ColonyError;

    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        match tag {
            "extractor" => Ok(Role::Extractor),
            "transporter" => Ok(Role::Transporter),
            "upgrader" => Ok(Role::Upgrader),
            "builder" => Ok(Role::Builder),
            "repairer" => Ok(Role::Repairer),
            other => Err(crate::core::error::ColonyError::UnknownRole(other.to_string())),
        }
    }
}

/// Grid tile coordinate. The y axis grows southward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: diagonal steps count as one tile.
    pub fn range_to(&self, other: Position) -> u32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy) as u32
    }

    pub fn step(&self, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        Position { x: self.x + dx, y: self.y + dy }
    }

    /// Direction of the single step that closes distance fastest,
    /// or None when already on the target tile.
    pub fn direction_to(&self, other: Position) -> Option<Direction> {
        let dx = (other.x - self.x).signum();
        let dy = (other.y - self.y).signum();
        match (dx, dy) {
            (0, 0) => None,
            (0, -1) => Some(Direction::North),
            (1, -1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (0, 1) => Some(Direction::South),
            (-1, 1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            _ => Some(Direction::NorthWest),
        }
    }
}

/// Eight-way step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}
