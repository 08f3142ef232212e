//! Pathfinding seam
//!
//! Path computation belongs to the simulation engine. The decision
//! core only ever asks "how far by path", so that is the whole trait.

use crate::core::types::Position;

/// Path-cost oracle supplied by the driver.
pub trait Navigator {
    /// Path cost in steps between two tiles, or None when unreachable.
    fn path_cost(&self, from: Position, to: Position) -> Option<u32>;
}

/// Obstacle-blind navigator: path cost equals Chebyshev range.
///
/// Good enough for tests and open maps; real drivers plug in their
/// pathfinder.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPath;

impl Navigator for DirectPath {
    fn path_cost(&self, from: Position, to: Position) -> Option<u32> {
        Some(from.range_to(to))
    }
}

/// Nearest item by path cost; unreachable items never win.
/// Ties keep the earlier item, matching snapshot iteration order.
pub fn nearest_by_path<'a, T>(
    nav: &dyn Navigator,
    from: Position,
    items: impl Iterator<Item = &'a T>,
    pos_of: impl Fn(&T) -> Position,
) -> Option<&'a T> {
    let mut best: Option<(u32, &T)> = None;
    for item in items {
        let Some(cost) = nav.path_cost(from, pos_of(item)) else {
            continue;
        };
        match best {
            Some((best_cost, _)) if best_cost <= cost => {}
            _ => best = Some((cost, item)),
        }
    }
    best.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_path_is_chebyshev() {
        let nav = DirectPath;
        assert_eq!(nav.path_cost(Position::new(0, 0), Position::new(3, 1)), Some(3));
        assert_eq!(nav.path_cost(Position::new(2, 2), Position::new(2, 2)), Some(0));
    }

    #[test]
    fn test_nearest_by_path_picks_closest() {
        let nav = DirectPath;
        let points = vec![Position::new(9, 0), Position::new(2, 1), Position::new(5, 5)];
        let nearest = nearest_by_path(&nav, Position::new(0, 0), points.iter(), |p| *p);
        assert_eq!(nearest, Some(&Position::new(2, 1)));
    }

    #[test]
    fn test_nearest_by_path_tie_keeps_first() {
        let nav = DirectPath;
        let points = vec![Position::new(3, 0), Position::new(0, 3)];
        let nearest = nearest_by_path(&nav, Position::new(0, 0), points.iter(), |p| *p);
        assert_eq!(nearest, Some(&Position::new(3, 0)));
    }

    struct WalledOff;

    impl Navigator for WalledOff {
        fn path_cost(&self, from: Position, to: Position) -> Option<u32> {
            // everything east of x=5 is unreachable
            if to.x > 5 {
                None
            } else {
                Some(from.range_to(to))
            }
        }
    }

    #[test]
    fn test_unreachable_items_skipped() {
        let points = vec![Position::new(7, 0), Position::new(4, 4)];
        let nearest = nearest_by_path(&WalledOff, Position::new(6, 0), points.iter(), |p| *p);
        assert_eq!(nearest, Some(&Position::new(4, 4)));
    }
}
