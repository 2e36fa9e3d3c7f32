use crate::config::GRID_SIZE;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that a step off the left or top edge is
/// representable and caught by [`Point::in_bounds`] instead of wrapping.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Returns true when the position lies inside the play grid.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Returns the neighboring position one cell along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GRID_SIZE;
    use crate::input::Direction;

    use super::Point;

    #[test]
    fn corners_are_in_bounds() {
        assert!(Point { x: 0, y: 0 }.in_bounds());
        assert!(Point {
            x: GRID_SIZE - 1,
            y: GRID_SIZE - 1
        }
        .in_bounds());
    }

    #[test]
    fn positions_past_any_edge_are_out_of_bounds() {
        assert!(!Point { x: -1, y: 5 }.in_bounds());
        assert!(!Point { x: 5, y: -1 }.in_bounds());
        assert!(!Point { x: GRID_SIZE, y: 5 }.in_bounds());
        assert!(!Point { x: 5, y: GRID_SIZE }.in_bounds());
    }

    #[test]
    fn step_moves_one_cell_per_direction() {
        let origin = Point { x: 4, y: 7 };

        assert_eq!(origin.step(Direction::Up), Point { x: 4, y: 6 });
        assert_eq!(origin.step(Direction::Down), Point { x: 4, y: 8 });
        assert_eq!(origin.step(Direction::Left), Point { x: 3, y: 7 });
        assert_eq!(origin.step(Direction::Right), Point { x: 5, y: 7 });
    }
}
