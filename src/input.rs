use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    ToMenu,
    Quit,
}

/// Maps a terminal key event to a game input.
///
/// Arrow keys and WASD steer, Enter and Space confirm, `m` returns to the
/// menu, `q` and Escape quit. Release events are ignored; key repeat acts
/// like a fresh press so held arrows keep steering.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Char('m' | 'M') => GameInput::ToMenu,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Single-slot direction buffer between input events and ticks.
///
/// Key presses can arrive faster than the tick interval. Each post
/// overwrites the slot, so of several requests between two ticks only the
/// most recent survives; the engine drains the slot once per tick and
/// applies reversal rejection there.
#[derive(Debug, Default)]
pub struct DirectionMailbox {
    slot: Option<Direction>,
}

impl DirectionMailbox {
    /// Stores `direction` as the next tick's requested direction.
    pub fn post(&mut self, direction: Direction) {
        self.slot = Some(direction);
    }

    /// Removes and returns the pending request, if any.
    pub fn take(&mut self) -> Option<Direction> {
        self.slot.take()
    }

    /// Discards any pending request.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, DirectionMailbox, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversals_are_invalid_turns() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn mailbox_keeps_only_the_most_recent_request() {
        let mut mailbox = DirectionMailbox::default();

        mailbox.post(Direction::Up);
        mailbox.post(Direction::Left);
        mailbox.post(Direction::Down);

        assert_eq!(mailbox.take(), Some(Direction::Down));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn mailbox_clear_discards_pending_request() {
        let mut mailbox = DirectionMailbox::default();

        mailbox.post(Direction::Up);
        mailbox.clear();

        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn keys_map_to_expected_inputs() {
        let cases = [
            (KeyCode::Up, GameInput::Direction(Direction::Up)),
            (KeyCode::Char('w'), GameInput::Direction(Direction::Up)),
            (KeyCode::Char('S'), GameInput::Direction(Direction::Down)),
            (KeyCode::Left, GameInput::Direction(Direction::Left)),
            (KeyCode::Char('d'), GameInput::Direction(Direction::Right)),
            (KeyCode::Enter, GameInput::Confirm),
            (KeyCode::Char(' '), GameInput::Confirm),
            (KeyCode::Char('m'), GameInput::ToMenu),
            (KeyCode::Esc, GameInput::Quit),
            (KeyCode::Char('q'), GameInput::Quit),
        ];

        for (code, expected) in cases {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(event), Some(expected));
        }
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_key(event), None);
    }
}
