use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::GameSnapshot;
use crate::theme::Theme;

const SEPARATOR: &str = " │ ";

/// Renders the score row above and the hint row below the play area, and
/// returns the area left for the board.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &GameSnapshot<'_>,
    theme: &Theme,
) -> Rect {
    let [score_area, play_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(
            snapshot.snake.len(),
            snapshot.score,
            usize::from(score_area.width),
            theme,
        ))
        .alignment(Alignment::Center),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(hint_text(snapshot)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_muted)),
        hint_area,
    );

    play_area
}

fn score_line(length: usize, score: u32, available_width: usize, theme: &Theme) -> Line<'static> {
    let compact = score_line_width(length, score, false) > available_width;
    let score_label = if compact { "S" } else { "Score" };
    let length_label = if compact { "L" } else { "Length" };
    let value_style = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.hud_muted);

    Line::from(vec![
        Span::styled(format!("{score_label}: "), label_style),
        Span::styled(score.to_string(), value_style),
        Span::styled(SEPARATOR, label_style),
        Span::styled(format!("{length_label}: "), label_style),
        Span::styled(length.to_string(), value_style),
    ])
}

fn score_line_width(length: usize, score: u32, compact: bool) -> usize {
    let score_label = if compact { "S" } else { "Score" };
    let length_label = if compact { "L" } else { "Length" };

    format!("{score_label}: {score}").width()
        + SEPARATOR.width()
        + format!("{length_label}: {length}").width()
}

fn hint_text(snapshot: &GameSnapshot<'_>) -> &'static str {
    match (snapshot.is_running, snapshot.is_over) {
        (true, false) => "Arrows/WASD or drag to steer · [Q] quit",
        (_, true) => "[Enter] play again · [Q] quit",
        (false, false) => "Drag on the board or use arrows to play",
    }
}
