use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::app::{FeedbackDisplay, MenuRow, MenuState};
use crate::config::{SPEED_LEVEL_MAX, SPEED_LEVEL_MIN, Theme};
use crate::game::{DeathReason, GameSession, GameSettings};

/// Milliseconds per step of the loading-dots animation.
const LOADING_DOT_PERIOD_MS: u128 = 300;

/// Draws the start menu as a centered popup.
pub fn render_start_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    settings: &GameSettings,
    menu: &MenuState,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("NEON SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        selector_line(
            "Difficulty",
            &settings.difficulty.to_string(),
            menu.focus == MenuRow::Difficulty,
            theme,
        ),
        Line::from(""),
        selector_line(
            &format!("Speed ({SPEED_LEVEL_MIN}-{SPEED_LEVEL_MAX})"),
            &settings.speed_level.to_string(),
            menu.focus == MenuRow::Speed,
            theme,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter]/[Space] Start",
            Style::new().fg(theme.menu_text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" new game ")
                    .border_style(Style::new().fg(theme.border_fg)),
            ),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(
            "Up/Down select row, Left/Right change value, [Q] quit",
        ))
        .alignment(Alignment::Center)
        .style(Style::new().fg(theme.menu_muted)),
        footer_row,
    );
}

/// Draws the game-over popup with the final score and the remark box.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    feedback: &FeedbackDisplay,
    animation_millis: u128,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 55);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::new()
                .fg(theme.game_over_title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", session.score),
            Style::new().fg(theme.menu_text),
        )),
        Line::from(Span::styled(
            cause_text(session.death_reason),
            Style::new().fg(theme.menu_muted),
        )),
        Line::from(""),
    ];

    let remark_width = usize::from(popup.width.saturating_sub(6)).max(10);
    match feedback {
        FeedbackDisplay::Hidden => {}
        FeedbackDisplay::Loading => {
            let dots = (animation_millis / LOADING_DOT_PERIOD_MS) % 3 + 1;
            lines.push(Line::from(Span::styled(
                format!("Thinking of a quip{}", ".".repeat(dots as usize)),
                Style::new().fg(theme.menu_muted),
            )));
        }
        FeedbackDisplay::Ready(text) => {
            for row in wrap_display(&format!("\u{201c}{text}\u{201d}"), remark_width) {
                lines.push(Line::from(Span::styled(
                    row,
                    Style::new()
                        .fg(theme.remark)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Play again   [M] Menu   [Q] Quit",
        Style::new().fg(theme.menu_text),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" game over ")
                    .border_style(Style::new().fg(theme.border_fg)),
            ),
        popup,
    );
}

fn cause_text(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "You hit the wall",
        Some(DeathReason::SelfCollision) => "You ran into yourself",
        Some(DeathReason::ObstacleCollision) => "You hit an obstacle",
        None => "The board is full",
    }
}

fn selector_line(label: &str, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let value_style = if focused {
        Style::new()
            .fg(theme.menu_selected_fg)
            .bg(theme.menu_selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(theme.menu_text)
    };
    let arrow_style = if focused {
        Style::new().fg(theme.menu_text)
    } else {
        Style::new().fg(theme.menu_muted)
    };

    Line::from(vec![
        Span::styled(format!("{label}  "), Style::new().fg(theme.menu_muted)),
        Span::styled("\u{25c4} ", arrow_style),
        Span::styled(format!(" {value} "), value_style),
        Span::styled(" \u{25ba}", arrow_style),
    ])
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

/// Greedy word wrap by terminal display width.
///
/// Words wider than the limit are split mid-word so no row ever exceeds it.
fn wrap_display(text: &str, max_width: usize) -> Vec<String> {
    debug_assert!(max_width > 0);

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0usize;

    for word in text.split_whitespace() {
        for piece in split_to_width(word, max_width) {
            let piece_width = piece.width();
            let sep_width = usize::from(!row.is_empty());

            if row_width + sep_width + piece_width > max_width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            } else if !row.is_empty() {
                row.push(' ');
                row_width += 1;
            }

            row.push_str(&piece);
            row_width += piece_width;
        }
    }

    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

fn split_to_width(word: &str, max_width: usize) -> Vec<String> {
    if word.width() <= max_width {
        return vec![word.to_owned()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0usize;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(ch);
        width += ch_width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::wrap_display;

    #[test]
    fn short_text_stays_on_one_row() {
        assert_eq!(wrap_display("well played", 20), vec!["well played"]);
    }

    #[test]
    fn rows_never_exceed_the_display_width() {
        let text = "A snake that eats twenty pieces of food deserves a considerably \
                    longer victory lap than this one got.";

        for row in wrap_display(text, 24) {
            assert!(row.width() <= 24, "row {row:?} is too wide");
        }
    }

    #[test]
    fn wrapping_preserves_every_word_in_order() {
        let text = "one two three four five six seven";
        let rows = wrap_display(text, 9);

        assert_eq!(rows.join(" "), text);
    }

    #[test]
    fn overlong_words_are_split_mid_word() {
        let rows = wrap_display("unquestionably", 5);

        assert!(rows.len() >= 3);
        for row in &rows {
            assert!(row.width() <= 5);
        }
        assert_eq!(rows.concat(), "unquestionably");
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        // Each CJK character is two columns wide.
        let rows = wrap_display("好好好 好好好", 6);

        assert_eq!(rows, vec!["好好好", "好好好"]);
    }
}
