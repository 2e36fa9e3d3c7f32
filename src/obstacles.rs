use std::fmt;

use clap::ValueEnum;

use crate::grid::Point;

/// Named obstacle-layout preset chosen before a game starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Four three-cell clusters, one near each corner of the grid.
const MEDIUM_OBSTACLES: [Point; 12] = [
    Point { x: 5, y: 5 },
    Point { x: 5, y: 6 },
    Point { x: 6, y: 5 },
    Point { x: 14, y: 5 },
    Point { x: 14, y: 6 },
    Point { x: 13, y: 5 },
    Point { x: 5, y: 14 },
    Point { x: 5, y: 13 },
    Point { x: 6, y: 14 },
    Point { x: 14, y: 14 },
    Point { x: 14, y: 13 },
    Point { x: 13, y: 14 },
];

/// Corner clusters pushed to the edges plus a cross through the center.
const HARD_OBSTACLES: [Point; 25] = [
    Point { x: 2, y: 2 },
    Point { x: 2, y: 3 },
    Point { x: 3, y: 2 },
    Point { x: 17, y: 2 },
    Point { x: 17, y: 3 },
    Point { x: 16, y: 2 },
    Point { x: 2, y: 17 },
    Point { x: 2, y: 16 },
    Point { x: 3, y: 17 },
    Point { x: 17, y: 17 },
    Point { x: 17, y: 16 },
    Point { x: 16, y: 17 },
    Point { x: 10, y: 7 },
    Point { x: 10, y: 8 },
    Point { x: 10, y: 9 },
    Point { x: 10, y: 10 },
    Point { x: 10, y: 11 },
    Point { x: 10, y: 12 },
    Point { x: 10, y: 13 },
    Point { x: 7, y: 10 },
    Point { x: 8, y: 10 },
    Point { x: 9, y: 10 },
    Point { x: 11, y: 10 },
    Point { x: 12, y: 10 },
    Point { x: 13, y: 10 },
];

impl Difficulty {
    /// Returns the fixed obstacle cells for this difficulty.
    ///
    /// The sets are immutable for the duration of a game; membership is a
    /// linear scan over at most 25 points.
    #[must_use]
    pub fn obstacles(self) -> &'static [Point] {
        match self {
            Self::Easy => &[],
            Self::Medium => &MEDIUM_OBSTACLES,
            Self::Hard => &HARD_OBSTACLES,
        }
    }

    /// Returns true when `position` is blocked on this difficulty.
    #[must_use]
    pub fn is_obstacle(self, position: Point) -> bool {
        self.obstacles().contains(&position)
    }

    /// Cycles to the next difficulty, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Cycles to the previous difficulty, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        };
        f.write_str(name)
    }
}
