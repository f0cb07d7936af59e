use anyhow::bail;

use crate::common::{Action, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn is_passable(&self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// Immutable grid the agent moves on. Rows are indexed first, so a position
/// is `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub height: usize,
    pub width: usize,
    grid: Vec<Vec<Cell>>,
}

impl Map {
    /// Builds a map from its rows. Fails unless every row has the same length.
    pub fn new(grid: Vec<Vec<Cell>>) -> anyhow::Result<Self> {
        let height = grid.len();
        let width = grid.first().map_or(0, |row| row.len());
        if let Some((x, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != width) {
            bail!("grid row {x} has {} cells, expected {width}", row.len());
        }
        Ok(Map {
            height,
            width,
            grid,
        })
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && x < self.height as isize && y < self.width as isize
    }

    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        self.grid[x][y].is_passable()
    }

    /// Position reached by taking `action` from `position`, if the target is
    /// inside the map and not a wall. Cleaning never moves the agent, so it
    /// always yields `None` here.
    pub fn step(&self, position: Position, action: Action) -> Option<Position> {
        let (dx, dy) = action.delta()?;
        let new_x = position.0 as isize + dx;
        let new_y = position.1 as isize + dy;
        if self.in_bounds(new_x, new_y) && self.is_passable(new_x as usize, new_y as usize) {
            Some((new_x as usize, new_y as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    #[test]
    fn test_read_map() {
        let world = World::from_file("world_file/test/rooms.txt").unwrap();
        let map = &world.map;

        assert_eq!(map.height, 4);
        assert_eq!(map.width, 5);

        assert!(map.is_passable(0, 0));
        assert!(!map.is_passable(0, 4));
        assert!(!map.is_passable(1, 1));
        assert!(map.is_passable(1, 4));

        assert_eq!(map.step((2, 1), Action::North), None);
        assert_eq!(map.step((2, 1), Action::South), Some((3, 1)));
        assert_eq!(map.step((2, 1), Action::East), Some((2, 2)));
        assert_eq!(map.step((2, 1), Action::West), Some((2, 0)));
    }

    #[test]
    fn test_step_bounds_and_walls() {
        let map = Map::new(vec![
            vec![Cell::Open, Cell::Wall],
            vec![Cell::Open, Cell::Open],
        ])
        .unwrap();

        assert_eq!(map.step((0, 0), Action::North), None);
        assert_eq!(map.step((0, 0), Action::West), None);
        assert_eq!(map.step((0, 0), Action::East), None);
        assert_eq!(map.step((0, 0), Action::South), Some((1, 0)));
        assert_eq!(map.step((1, 1), Action::East), None);
        assert_eq!(map.step((1, 1), Action::South), None);
        assert_eq!(map.step((1, 1), Action::West), Some((1, 0)));
        assert_eq!(map.step((1, 1), Action::Vacuum), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Map::new(vec![
            vec![Cell::Open, Cell::Open],
            vec![Cell::Open],
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "grid row 1 has 1 cells, expected 2");

        assert!(Map::new(vec![]).is_ok());
    }
}
