//! Decision output: the intents a policy hands back to the driver

use crate::core::types::{DepositId, Direction, LodeId, Position, SiteId, StructureId};
use serde::{Deserialize, Serialize};

/// One world-mutating intent. A drone issues at most one per tick;
/// the driver applies it against the live simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Work the lode (interact range)
    Extract { lode: LodeId },
    /// Put construction work into the site (work range)
    Build { site: SiteId },
    /// Restore hits on the structure (work range)
    Repair { structure: StructureId },
    /// Take ore out of a store (interact range)
    Withdraw { structure: StructureId },
    /// Put held ore into a store (interact range)
    Transfer { structure: StructureId },
    /// Scoop a ground deposit (interact range)
    Pickup { deposit: DepositId },
    /// Feed the colony nexus (work range)
    Upgrade { nexus: StructureId },
    /// Let the driver path toward the target
    MoveToward { target: Position },
    /// Single explicit step
    Step { dir: Direction },
}

/// Everything a policy decided this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Decision {
    pub action: Option<Action>,
    /// Cosmetic speech bubble, no state effect
    pub say: Option<&'static str>,
    /// Place a road construction site here
    pub road_site: Option<Position>,
}

impl Decision {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn act(action: Action) -> Self {
        Self { action: Some(action), say: None, road_site: None }
    }

    pub fn with_say(mut self, say: &'static str) -> Self {
        self.say = Some(say);
        self
    }

    pub fn with_road_site(mut self, pos: Position) -> Self {
        self.road_site = Some(pos);
        self
    }

    pub fn is_idle(&self) -> bool {
        self.action.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_decision_empty() {
        let decision = Decision::idle();
        assert!(decision.is_idle());
        assert_eq!(decision.say, None);
        assert_eq!(decision.road_site, None);
    }

    #[test]
    fn test_builder_style_composition() {
        let decision = Decision::act(Action::MoveToward { target: Position::new(8, 3) })
            .with_say("hauling")
            .with_road_site(Position::new(1, 1));
        assert!(!decision.is_idle());
        assert_eq!(decision.say, Some("hauling"));
        assert_eq!(decision.road_site, Some(Position::new(1, 1)));
    }
}
