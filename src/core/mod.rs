pub mod config;
pub mod error;
pub mod types;

pub use error::{ColonyError, Result};
pub use types::{DepositId, Direction, DroneId, LodeId, Position, Role, SiteId, StructureId, Tick};
