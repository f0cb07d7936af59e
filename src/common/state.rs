use std::collections::BTreeSet;

use super::{Action, Position};
use crate::map::Map;

/// Search vertex: where the agent stands and which cells are still dirty.
///
/// Dirty cells live in an ordered set, so two states holding the same cells
/// compare and hash equal regardless of the order the cells were added in.
/// The state can therefore be used directly as a visited-set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub position: Position,
    pub dirty: BTreeSet<Position>,
}

impl State {
    pub fn new(position: Position, dirty: impl IntoIterator<Item = Position>) -> Self {
        State {
            position,
            dirty: dirty.into_iter().collect(),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.dirty.is_empty()
    }

    /// The agent and every dirty cell sit on open cells inside the map.
    pub fn verify(&self, map: &Map) -> bool {
        std::iter::once(&self.position)
            .chain(self.dirty.iter())
            .all(|&(x, y)| x < map.height && y < map.width && map.is_passable(x, y))
    }

    /// Applies one action, returning `None` when it is not applicable: moving
    /// off the map or into a wall, or cleaning a cell that is not dirty.
    pub fn apply(&self, action: Action, map: &Map) -> Option<State> {
        match action {
            Action::Vacuum => {
                if !self.dirty.contains(&self.position) {
                    return None;
                }
                let mut dirty = self.dirty.clone();
                dirty.remove(&self.position);
                Some(State {
                    position: self.position,
                    dirty,
                })
            }
            _ => map.step(self.position, action).map(|position| State {
                position,
                dirty: self.dirty.clone(),
            }),
        }
    }

    /// Every applicable action with its resulting state, in `Action::ALL` order.
    pub fn successors<'a>(&'a self, map: &'a Map) -> impl Iterator<Item = (Action, State)> + 'a {
        Action::ALL
            .into_iter()
            .filter_map(move |action| self.apply(action, map).map(|next| (action, next)))
    }
}

/// Replays `actions` from `start`. True iff every action applies and the last
/// state has no dirt left.
pub fn verify_plan(map: &Map, start: &State, actions: &[Action]) -> bool {
    let mut current = start.clone();
    for &action in actions {
        match current.apply(action, map) {
            Some(next) => current = next,
            None => return false,
        }
    }
    current.is_goal()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::map::Cell;

    fn open_map(height: usize, width: usize) -> Map {
        Map::new(vec![vec![Cell::Open; width]; height]).unwrap()
    }

    #[test]
    fn test_dirty_order_does_not_matter() {
        let a = State::new((0, 0), vec![(1, 1), (0, 2), (2, 0)]);
        let b = State::new((0, 0), vec![(2, 0), (1, 1), (0, 2)]);
        assert_eq!(a, b);

        let mut visited = HashSet::new();
        assert!(visited.insert(a));
        assert!(!visited.insert(b));
    }

    #[test]
    fn test_vacuum_removes_only_current_cell() {
        let map = open_map(2, 2);
        let state = State::new((0, 1), vec![(0, 1), (1, 0)]);
        let next = state.apply(Action::Vacuum, &map).unwrap();
        assert_eq!(next.position, (0, 1));
        assert_eq!(next.dirty, BTreeSet::from([(1, 0)]));
    }

    #[test]
    fn test_vacuum_on_clean_cell_is_rejected() {
        let map = open_map(2, 2);
        let state = State::new((0, 0), vec![(1, 1)]);
        assert_eq!(state.apply(Action::Vacuum, &map), None);
    }

    #[test]
    fn test_move_keeps_dirt() {
        let map = open_map(2, 2);
        let state = State::new((0, 0), vec![(0, 0), (1, 1)]);
        let next = state.apply(Action::South, &map).unwrap();
        assert_eq!(next.position, (1, 0));
        assert_eq!(next.dirty, state.dirty);
    }

    #[test]
    fn test_successor_order() {
        let map = Map::new(vec![
            vec![Cell::Open, Cell::Open, Cell::Open],
            vec![Cell::Open, Cell::Open, Cell::Wall],
            vec![Cell::Open, Cell::Open, Cell::Open],
        ])
        .unwrap();
        let state = State::new((1, 1), vec![(1, 1)]);
        let actions: Vec<Action> = state.successors(&map).map(|(action, _)| action).collect();
        assert_eq!(
            actions,
            vec![Action::North, Action::South, Action::West, Action::Vacuum]
        );
    }

    #[test]
    fn test_verify_state() {
        let map = Map::new(vec![vec![Cell::Open, Cell::Wall]]).unwrap();
        assert!(State::new((0, 0), vec![(0, 0)]).verify(&map));
        assert!(!State::new((0, 1), vec![]).verify(&map));
        assert!(!State::new((0, 0), vec![(0, 1)]).verify(&map));
        assert!(!State::new((0, 0), vec![(3, 0)]).verify(&map));
    }

    #[test]
    fn test_verify_plan() {
        let map = open_map(1, 2);
        let start = State::new((0, 0), vec![(0, 1)]);
        assert!(verify_plan(&map, &start, &[Action::East, Action::Vacuum]));
        assert!(!verify_plan(&map, &start, &[Action::East]));
        assert!(!verify_plan(&map, &start, &[Action::Vacuum]));
        assert!(!verify_plan(&map, &start, &[Action::North]));
        assert!(verify_plan(&map, &State::new((0, 0), vec![]), &[]));
    }
}
