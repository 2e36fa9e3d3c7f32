use ratatui::style::Color;

/// Side length of the square play grid in logical cells.
pub const GRID_SIZE: i32 = 20;

/// Spawn cell of the snake head; the second segment sits one cell left.
pub const SNAKE_SPAWN_X: i32 = 5;
pub const SNAKE_SPAWN_Y: i32 = 10;

/// Base tick intervals in milliseconds, indexed by initial speed level - 1.
/// Level 1 is the slowest, level 5 the fastest.
pub const BASE_INTERVALS_MS: [u64; 5] = [250, 200, 150, 110, 80];

/// Lowest selectable initial speed level.
pub const SPEED_LEVEL_MIN: u8 = 1;

/// Highest selectable initial speed level.
pub const SPEED_LEVEL_MAX: u8 = 5;

/// Interval reduction applied at every speed step, in milliseconds.
pub const SPEED_STEP_MS: u64 = 20;

/// Floor for the tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 40;

/// Score needed per speed step (interval reduction).
pub const POINTS_PER_SPEED_STEP: u32 = 20;

/// Returns the base tick interval for an initial speed level (1..=5).
///
/// Out-of-range levels clamp to the nearest table entry; the CLI and the
/// menu only ever produce levels inside the table.
#[must_use]
pub fn base_interval_ms(level: u8) -> u64 {
    let idx = usize::from(level.saturating_sub(1)).min(BASE_INTERVALS_MS.len() - 1);
    BASE_INTERVALS_MS[idx]
}

/// Terminal columns occupied by one logical cell.
///
/// Terminal glyphs are roughly twice as tall as they are wide, so two
/// columns per cell keep the square grid visually square.
pub const CELL_WIDTH: u16 = 2;

/// Two-column glyph for snake segments; head and body differ by color.
pub const GLYPH_SNAKE: &str = "██";

/// Two-column glyph for food.
pub const GLYPH_FOOD: &str = "● ";

/// Two-column glyph for obstacle cells.
pub const GLYPH_OBSTACLE: &str = "▓▓";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Snake head block color.
    pub snake_head: Color,
    /// Snake body block color.
    pub snake_body: Color,
    /// Food marker color.
    pub food: Color,
    /// Obstacle block color.
    pub obstacle: Color,
    /// Background for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_score: Color,
    pub hud_speed: Color,
    pub menu_title: Color,
    pub menu_text: Color,
    pub menu_muted: Color,
    pub menu_selected_fg: Color,
    pub menu_selected_bg: Color,
    pub game_over_title: Color,
    /// Color of the remark text on the game-over screen.
    pub remark: Color,
}

/// Neon cyan-on-slate palette.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::Rgb(34, 211, 238),
    snake_body: Color::Rgb(8, 145, 178),
    food: Color::Rgb(244, 63, 94),
    obstacle: Color::Rgb(51, 65, 85),
    play_bg: Color::Rgb(15, 23, 42),
    border_fg: Color::Rgb(30, 41, 59),
    hud_label: Color::Rgb(100, 116, 139),
    hud_score: Color::Rgb(34, 211, 238),
    hud_speed: Color::Rgb(96, 165, 250),
    menu_title: Color::Rgb(34, 211, 238),
    menu_text: Color::Rgb(226, 232, 240),
    menu_muted: Color::Rgb(148, 163, 184),
    menu_selected_fg: Color::Rgb(248, 250, 252),
    menu_selected_bg: Color::Rgb(6, 182, 212),
    game_over_title: Color::Rgb(244, 63, 94),
    remark: Color::Rgb(165, 243, 252),
};
