//! Loadout sizing: greedy part-fill patterns per role
//!
//! Part order is load-bearing. The simulation resolves damage front to
//! back, so each pattern prepends the part it wants to survive longest
//! and appends the expendable ones. Growth stops the moment the next
//! increment no longer fits; there are no partial parts.

use crate::agent::parts::Part;
use crate::core::types::Role;

/// Fill an ordered part list for `role` from `budget`.
///
/// The budget arrives already clamped to the role's cap by the
/// admission policy. Patterns:
/// - extractor: one servo, then tools, with a servo prepended on every
///   4th increment so mobility grows with body length.
/// - transporter: two holds and two servos, then hold/servo pairs for
///   a 1:1 carry ratio at full speed.
/// - upgrader, builder, repairer: one tool/hold/servo triple, then
///   whole triples.
pub fn size_loadout(role: Role, budget: u32) -> Vec<Part> {
    match role {
        Role::Extractor => extractor_loadout(budget),
        Role::Transporter => transporter_loadout(budget),
        Role::Upgrader | Role::Builder | Role::Repairer => worker_loadout(budget),
    }
}

fn extractor_loadout(mut budget: u32) -> Vec<Part> {
    let mut body = vec![Part::Servo];
    budget = budget.saturating_sub(Part::Servo.cost());

    let mut increment = 1;
    while budget >= Part::Tool.cost() {
        if increment % 4 == 0 {
            body.insert(0, Part::Servo);
            budget -= Part::Servo.cost();
        } else {
            body.push(Part::Tool);
            budget -= Part::Tool.cost();
        }
        increment += 1;
    }
    body
}

fn transporter_loadout(mut budget: u32) -> Vec<Part> {
    let mut body = vec![Part::Hold, Part::Hold, Part::Servo, Part::Servo];
    budget = budget.saturating_sub(2 * Part::Hold.cost() + 2 * Part::Servo.cost());

    let pair = Part::Hold.cost() + Part::Servo.cost();
    while budget >= pair {
        body.insert(0, Part::Hold);
        body.push(Part::Servo);
        budget -= pair;
    }
    body
}

fn worker_loadout(mut budget: u32) -> Vec<Part> {
    let mut body = vec![Part::Tool, Part::Hold, Part::Servo];
    let triple = Part::Tool.cost() + Part::Hold.cost() + Part::Servo.cost();
    budget = budget.saturating_sub(triple);

    while budget >= triple {
        body.insert(0, Part::Tool);
        body.push(Part::Hold);
        body.push(Part::Servo);
        budget -= triple;
    }
    body
}
