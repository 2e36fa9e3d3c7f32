use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::spawn_food;
use crate::grid::Point;
use crate::input::{direction_change_is_valid, Direction};
use crate::obstacles::Difficulty;
use crate::snake::Snake;
use crate::speed::SpeedRamp;

/// The two choices made on the menu before a game starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    /// Initial speed level, 1 (slowest) to 5 (fastest).
    pub speed_level: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            speed_level: 3,
        }
    }
}

/// Whether the session still accepts ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    Playing,
    GameOver,
}

/// Outcome reported by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickStatus {
    Continue,
    GameOver,
}

/// What the snake ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    ObstacleCollision,
}

/// Complete mutable state of one game, from start to game over.
///
/// A session is rebuilt from scratch on every start; nothing carries over
/// between games. The loop holds the only mutable reference and drives the
/// session exclusively through [`GameSession::tick`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub speed: SpeedRamp,
    pub difficulty: Difficulty,
    pub status: SessionStatus,
    pub death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a fresh session from the menu settings.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, mut rng: StdRng) -> Self {
        let snake = Snake::spawn();
        let food = spawn_food(&mut rng, &snake, settings.difficulty.obstacles())
            .expect("a fresh board always has room for food");

        Self {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            speed: SpeedRamp::new(settings.speed_level),
            difficulty: settings.difficulty,
            status: SessionStatus::Playing,
            death_reason: None,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// `requested` is the most recent externally requested direction, if
    /// any; a request that exactly reverses the current heading is ignored
    /// for this tick. Once the session has ended further ticks do nothing.
    pub fn tick(&mut self, requested: Option<Direction>) -> TickStatus {
        if self.status != SessionStatus::Playing {
            return TickStatus::GameOver;
        }

        if let Some(next) = requested {
            if direction_change_is_valid(self.direction, next) {
                self.direction = next;
            }
        }

        let new_head = self.snake.head().step(self.direction);

        // Collision precedence: wall, then self, then obstacle. The self
        // check runs against the whole pre-move body, tail included, so
        // moving into the cell the tail is about to vacate is death.
        let collision = if !new_head.in_bounds() {
            Some(DeathReason::WallCollision)
        } else if self.snake.occupies(new_head) {
            Some(DeathReason::SelfCollision)
        } else if self.difficulty.is_obstacle(new_head) {
            Some(DeathReason::ObstacleCollision)
        } else {
            None
        };

        if let Some(reason) = collision {
            return self.end(Some(reason));
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if ate {
            self.score += 1;
            self.speed.on_score(self.score);

            match spawn_food(&mut self.rng, &self.snake, self.difficulty.obstacles()) {
                Some(food) => self.food = food,
                // Nothing left to eat; the run is over.
                None => return self.end(None),
            }
        }

        TickStatus::Continue
    }

    fn end(&mut self, reason: Option<DeathReason>) -> TickStatus {
        self.status = SessionStatus::GameOver;
        self.death_reason = reason;
        TickStatus::GameOver
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Point;
    use crate::input::Direction;
    use crate::obstacles::Difficulty;
    use crate::snake::Snake;

    use super::{DeathReason, GameSession, GameSettings, SessionStatus, TickStatus};

    fn easy_session(seed: u64) -> GameSession {
        GameSession::new_with_seed(GameSettings::default(), seed)
    }

    #[test]
    fn eating_grows_the_snake_and_scores_one_point() {
        let mut session = easy_session(1);
        session.food = Point { x: 6, y: 10 };

        let status = session.tick(None);

        assert_eq!(status, TickStatus::Continue);
        assert_eq!(session.score, 1);
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.snake.head(), Point { x: 6, y: 10 });
        assert!(session.snake.occupies(Point { x: 5, y: 10 }));
        assert!(session.snake.occupies(Point { x: 4, y: 10 }));

        // Replacement food avoids the grown snake.
        assert!(session.food.in_bounds());
        assert!(!session.snake.occupies(session.food));
    }

    #[test]
    fn plain_move_keeps_the_length_unchanged() {
        let mut session = easy_session(2);
        session.food = Point { x: 0, y: 0 };

        session.tick(None);

        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.snake.head(), Point { x: 6, y: 10 });
        assert!(!session.snake.occupies(Point { x: 4, y: 10 }));
    }

    #[test]
    fn reverse_request_is_ignored_for_the_tick() {
        let mut session = easy_session(3);
        session.food = Point { x: 0, y: 0 };

        session.tick(Some(Direction::Left));

        assert_eq!(session.direction, Direction::Right);
        assert_eq!(session.snake.head(), Point { x: 6, y: 10 });
        assert_eq!(session.status, SessionStatus::Playing);
    }

    #[test]
    fn perpendicular_request_is_adopted() {
        let mut session = easy_session(4);
        session.food = Point { x: 0, y: 0 };

        session.tick(Some(Direction::Up));

        assert_eq!(session.direction, Direction::Up);
        assert_eq!(session.snake.head(), Point { x: 5, y: 9 });
    }

    #[test]
    fn wall_collision_ends_the_session_with_the_snake_unchanged() {
        let mut session = easy_session(5);
        session.snake = Snake::from_segments(vec![
            Point { x: 0, y: 10 },
            Point { x: 1, y: 10 },
        ]);
        session.direction = Direction::Left;

        let status = session.tick(None);

        assert_eq!(status, TickStatus::GameOver);
        assert_eq!(session.status, SessionStatus::GameOver);
        assert_eq!(session.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.snake.head(), Point { x: 0, y: 10 });
        assert_eq!(session.score, 0);
    }

    #[test]
    fn moving_into_the_departing_tail_cell_is_death() {
        let mut session = easy_session(6);
        // Head at (2,2); the tail at (2,3) would vacate this tick, but the
        // pre-move body check forbids entering it anyway.
        session.snake = Snake::from_segments(vec![
            Point { x: 2, y: 2 },
            Point { x: 3, y: 2 },
            Point { x: 3, y: 3 },
            Point { x: 2, y: 3 },
        ]);
        session.direction = Direction::Down;

        let status = session.tick(None);

        assert_eq!(status, TickStatus::GameOver);
        assert_eq!(session.death_reason, Some(DeathReason::SelfCollision));
        assert_eq!(session.snake.len(), 4);
    }

    #[test]
    fn obstacle_collision_ends_the_session() {
        let settings = GameSettings {
            difficulty: Difficulty::Medium,
            speed_level: 3,
        };
        let mut session = GameSession::new_with_seed(settings, 7);
        session.snake = Snake::from_segments(vec![
            Point { x: 4, y: 5 },
            Point { x: 3, y: 5 },
        ]);
        session.direction = Direction::Right;

        let status = session.tick(None);

        assert_eq!(status, TickStatus::GameOver);
        assert_eq!(session.death_reason, Some(DeathReason::ObstacleCollision));
        assert_eq!(session.snake.head(), Point { x: 4, y: 5 });
    }

    #[test]
    fn wall_precedes_self_when_both_would_match() {
        let mut session = easy_session(8);
        // A body folded against the left wall: stepping left exits the
        // grid, so the wall reason wins even though the body is adjacent.
        session.snake = Snake::from_segments(vec![
            Point { x: 0, y: 5 },
            Point { x: 0, y: 6 },
            Point { x: 1, y: 6 },
            Point { x: 1, y: 5 },
        ]);
        session.direction = Direction::Left;

        session.tick(None);

        assert_eq!(session.death_reason, Some(DeathReason::WallCollision));
    }

    #[test]
    fn ticks_after_game_over_do_nothing() {
        let mut session = easy_session(9);
        session.snake = Snake::from_segments(vec![
            Point { x: 0, y: 10 },
            Point { x: 1, y: 10 },
        ]);
        session.direction = Direction::Left;
        session.tick(None);

        let status = session.tick(Some(Direction::Down));

        assert_eq!(status, TickStatus::GameOver);
        assert_eq!(session.snake.head(), Point { x: 0, y: 10 });
        assert_eq!(session.score, 0);
    }

    #[test]
    fn twentieth_point_steps_the_speed_ramp() {
        let mut session = easy_session(10);
        session.score = 19;
        session.food = Point { x: 6, y: 10 };

        session.tick(None);

        assert_eq!(session.score, 20);
        assert_eq!(session.speed.current_ms(), 130);
        assert_eq!(session.speed.derived_level(), 4);
    }

    #[test]
    fn fresh_session_matches_the_starting_contract() {
        let session = easy_session(11);

        assert_eq!(session.snake.len(), 2);
        assert_eq!(session.snake.head(), Point { x: 5, y: 10 });
        assert_eq!(session.direction, Direction::Right);
        assert_eq!(session.score, 0);
        assert_eq!(session.speed.current_ms(), 150);
        assert_eq!(session.status, SessionStatus::Playing);
        assert!(session.food.in_bounds());
        assert!(!session.snake.occupies(session.food));
    }
}
