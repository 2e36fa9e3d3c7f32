use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameSession;

/// Renders the one-line HUD: score, derived speed level, difficulty.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(status_line(session, theme)).alignment(Alignment::Center),
        area,
    );
}

fn status_line(session: &GameSession, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(
            session.score.to_string(),
            Style::new().fg(theme.hud_score),
        ),
        Span::styled("  Speed: ", label),
        Span::styled(
            session.speed.derived_level().to_string(),
            Style::new().fg(theme.hud_speed),
        ),
        Span::styled("  ", label),
        Span::styled(session.difficulty.to_string(), label),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::THEME_NEON;
    use crate::game::{GameSession, GameSettings};
    use crate::obstacles::Difficulty;

    use super::status_line;

    #[test]
    fn status_line_shows_score_level_and_difficulty() {
        let settings = GameSettings {
            difficulty: Difficulty::Hard,
            speed_level: 2,
        };
        let mut session = GameSession::new_with_seed(settings, 1);
        session.score = 17;

        let line = status_line(&session, &THEME_NEON);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert_eq!(text, "Score: 17  Speed: 2  HARD");
    }
}
