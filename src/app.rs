use std::time::{Duration, Instant};

use crate::config::{SPEED_LEVEL_MAX, SPEED_LEVEL_MIN};
use crate::feedback::{FALLBACK_REMARK, FeedbackClient};
use crate::game::{GameSession, GameSettings, TickStatus};
use crate::input::{Direction, DirectionMailbox, GameInput};

/// Upper bound on how long the loop may sleep between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// State of the remark box on the game-over screen.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FeedbackDisplay {
    Hidden,
    Loading,
    Ready(String),
}

/// Menu row that currently has focus.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuRow {
    Difficulty,
    Speed,
}

impl MenuRow {
    fn toggled(self) -> Self {
        match self {
            Self::Difficulty => Self::Speed,
            Self::Speed => Self::Difficulty,
        }
    }
}

/// Focus state of the start menu; the values it edits live in
/// [`GameSettings`].
#[derive(Debug, Clone, Copy)]
pub struct MenuState {
    pub focus: MenuRow,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            focus: MenuRow::Difficulty,
        }
    }
}

/// Top-level application: the menu/playing/game-over machine plus the one
/// mutable handle to the active session.
///
/// Direction keys land in the mailbox and are drained once per tick; every
/// other input acts on the machine directly. Feedback events are matched
/// against the session serial so a slow response from an abandoned game can
/// never surface under a newer one.
pub struct App {
    pub screen: Screen,
    pub settings: GameSettings,
    pub menu: MenuState,
    pub session: Option<GameSession>,
    pub mailbox: DirectionMailbox,
    pub feedback: FeedbackDisplay,
    pub should_quit: bool,
    client: FeedbackClient,
    serial: u64,
    last_tick: Instant,
    launched_at: Instant,
}

impl App {
    #[must_use]
    pub fn new(settings: GameSettings, client: FeedbackClient) -> Self {
        let now = Instant::now();

        Self {
            screen: Screen::Menu,
            settings,
            menu: MenuState::default(),
            session: None,
            mailbox: DirectionMailbox::default(),
            feedback: FeedbackDisplay::Hidden,
            should_quit: false,
            client,
            serial: 0,
            last_tick: now,
            launched_at: now,
        }
    }

    /// Starts a fresh game from the current settings.
    pub fn start_game(&mut self, now: Instant) {
        self.begin(GameSession::new(self.settings), now);
    }

    /// Starts a game with a deterministic food sequence.
    pub fn start_game_seeded(&mut self, seed: u64, now: Instant) {
        self.begin(GameSession::new_with_seed(self.settings, seed), now);
    }

    fn begin(&mut self, session: GameSession, now: Instant) {
        self.session = Some(session);
        self.serial += 1;
        self.mailbox.clear();
        self.feedback = FeedbackDisplay::Hidden;
        self.screen = Screen::Playing;
        self.last_tick = now;
    }

    /// Leaves the current game and returns to the menu.
    ///
    /// Any in-flight feedback request keeps running; its eventual result is
    /// discarded by the serial check rather than cancelled.
    pub fn to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.session = None;
        self.mailbox.clear();
        self.feedback = FeedbackDisplay::Hidden;
    }

    /// Routes one input event according to the current screen.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        if input == GameInput::Quit {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_input(input, now),
            Screen::Playing => match input {
                GameInput::Direction(direction) => self.mailbox.post(direction),
                GameInput::ToMenu => self.to_menu(),
                GameInput::Confirm | GameInput::Quit => {}
            },
            Screen::GameOver => match input {
                GameInput::Confirm => self.start_game(now),
                GameInput::ToMenu => self.to_menu(),
                GameInput::Direction(_) | GameInput::Quit => {}
            },
        }
    }

    fn handle_menu_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Confirm => self.start_game(now),
            GameInput::Direction(Direction::Up | Direction::Down) => {
                self.menu.focus = self.menu.focus.toggled();
            }
            GameInput::Direction(Direction::Left) => self.cycle_focused_value(false),
            GameInput::Direction(Direction::Right) => self.cycle_focused_value(true),
            GameInput::ToMenu | GameInput::Quit => {}
        }
    }

    fn cycle_focused_value(&mut self, forward: bool) {
        match self.menu.focus {
            MenuRow::Difficulty => {
                self.settings.difficulty = if forward {
                    self.settings.difficulty.next()
                } else {
                    self.settings.difficulty.previous()
                };
            }
            MenuRow::Speed => {
                let level = self.settings.speed_level;
                self.settings.speed_level = if forward {
                    level.saturating_add(1).min(SPEED_LEVEL_MAX)
                } else {
                    level.saturating_sub(1).max(SPEED_LEVEL_MIN)
                };
            }
        }
    }

    /// Advances the game when the current tick interval has elapsed.
    ///
    /// A speed-up changes the interval the next call compares against, so
    /// reschedules take effect from the following tick.
    pub fn update(&mut self, now: Instant) {
        if self.screen != Screen::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if now.duration_since(self.last_tick) < session.speed.tick_interval() {
            return;
        }

        let requested = self.mailbox.take();
        let status = session.tick(requested);
        self.last_tick = now;

        if status == TickStatus::GameOver {
            self.screen = Screen::GameOver;

            let score = session.score;
            let difficulty = session.difficulty;
            if self.client.is_enabled() {
                self.feedback = FeedbackDisplay::Loading;
                self.client.request(self.serial, score, difficulty);
            } else {
                self.feedback = FeedbackDisplay::Ready(FALLBACK_REMARK.to_owned());
            }
        }
    }

    /// Drains delivered remarks; only the current session's, and only while
    /// the remark box is still waiting, reach the screen.
    pub fn poll_feedback(&mut self) {
        while let Some(event) = self.client.try_recv() {
            if event.serial == self.serial && self.feedback == FeedbackDisplay::Loading {
                self.feedback = FeedbackDisplay::Ready(event.text);
            }
        }
    }

    /// How long the loop may block waiting for input.
    ///
    /// Capped at the frame interval so animations and feedback polling stay
    /// responsive even on slow ticks.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let Some(session) = self.session.as_ref() else {
            return FRAME_INTERVAL;
        };
        if self.screen != Screen::Playing {
            return FRAME_INTERVAL;
        }

        let next_tick = self.last_tick + session.speed.tick_interval();
        next_tick.saturating_duration_since(now).min(FRAME_INTERVAL)
    }

    /// Milliseconds since launch; drives the loading-dots animation.
    #[must_use]
    pub fn animation_millis(&self, now: Instant) -> u128 {
        now.duration_since(self.launched_at).as_millis()
    }
}
