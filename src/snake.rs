use std::collections::VecDeque;

use crate::config::{SNAKE_SPAWN_X, SNAKE_SPAWN_Y};
use crate::grid::Point;

/// Ordered snake body, head first.
///
/// The body is never empty and holds no duplicate cells. Movement is
/// driven from the outside: the engine computes and validates the next
/// head cell, then commits it with [`Snake::advance`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// Creates the two-cell starting snake, head on the spawn cell and the
    /// tail one cell to its left.
    #[must_use]
    pub fn spawn() -> Self {
        Self::from_segments(vec![
            Point {
                x: SNAKE_SPAWN_X,
                y: SNAKE_SPAWN_Y,
            },
            Point {
                x: SNAKE_SPAWN_X - 1,
                y: SNAKE_SPAWN_Y,
            },
        ])
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Point>) -> Self {
        debug_assert!(!segments.is_empty(), "snake body must not be empty");

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Commits one movement step to `new_head`.
    ///
    /// The tail cell is dropped unless `grow` is set, so a plain move keeps
    /// the length unchanged and an eating move nets one extra segment.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Point {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Point) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }
}
