use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::app::{App, Screen};
use crate::config::{
    CELL_WIDTH, GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_SNAKE, GRID_SIZE, THEME_NEON, Theme,
};
use crate::game::GameSession;
use crate::grid::Point;
use crate::ui::{hud, menu};

/// Renders one full frame from immutable app state.
pub fn render(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let theme = &THEME_NEON;

    match app.screen {
        Screen::Menu => menu::render_start_menu(frame, area, &app.settings, &app.menu, theme),
        Screen::Playing | Screen::GameOver => {
            let Some(session) = app.session.as_ref() else {
                return;
            };

            let board = board_area(area);
            hud::render_hud(frame, hud_area(board, area), session, theme);
            render_board(frame, board, session, theme);

            if app.screen == Screen::GameOver {
                menu::render_game_over(
                    frame,
                    area,
                    session,
                    &app.feedback,
                    app.animation_millis(now),
                    theme,
                );
            }
        }
    }
}

fn render_board(frame: &mut Frame<'_>, board: Rect, session: &GameSession, theme: &Theme) {
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let buffer = frame.buffer_mut();

    for cell in session.difficulty.obstacles() {
        if let Some((x, y)) = logical_to_terminal(inner, *cell) {
            buffer.set_string(x, y, GLYPH_OBSTACLE, Style::new().fg(theme.obstacle));
        }
    }

    if let Some((x, y)) = logical_to_terminal(inner, session.food) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }

    let head = session.snake.head();
    for segment in session.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Centers the bordered board in the terminal.
///
/// Each logical cell spans two terminal columns so the square grid reads as
/// square; the border adds one row/column on each side.
fn board_area(area: Rect) -> Rect {
    let grid = GRID_SIZE as u16;
    let width = (grid * CELL_WIDTH + 2).min(area.width);
    let height = (grid + 2).min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// The single HUD line directly above the board, falling back to the top
/// row on cramped terminals.
fn hud_area(board: Rect, area: Rect) -> Rect {
    let y = board.y.checked_sub(1).unwrap_or(area.y);

    Rect {
        x: board.x,
        y,
        width: board.width,
        height: 1,
    }
}

/// Maps a grid cell to the terminal column/row of its first glyph column.
fn logical_to_terminal(inner: Rect, cell: Point) -> Option<(u16, u16)> {
    if !cell.in_bounds() {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + CELL_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
