use rand::Rng;

use crate::config::GRID_SIZE;
use crate::grid::Point;
use crate::snake::Snake;

/// Random placement attempts before switching to the exhaustive scan.
///
/// On an emptyish board the first sample almost always lands; the cap only
/// matters when the snake and obstacles cover most of the grid, where
/// rejection sampling could spin for a long time.
const MAX_SAMPLE_ATTEMPTS: u32 = 256;

/// Picks a uniformly random cell that is on neither the snake nor an
/// obstacle.
///
/// Samples random cells first and falls back to scanning every free cell
/// when the samples keep missing, so placement terminates whenever at
/// least one free cell exists. Returns `None` only on a full board.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    obstacles: &[Point],
) -> Option<Point> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Point {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };

        if is_free(candidate, snake, obstacles) {
            return Some(candidate);
        }
    }

    let mut free = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let cell = Point { x, y };
            if is_free(cell, snake, obstacles) {
                free.push(cell);
            }
        }
    }

    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}

fn is_free(cell: Point, snake: &Snake, obstacles: &[Point]) -> bool {
    !snake.occupies(cell) && !obstacles.contains(&cell)
}
