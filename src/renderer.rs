use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::board::{project, CellKind};
use crate::config::{GridSize, CELL_COLUMNS};
use crate::game::GameSnapshot;
use crate::theme::Theme;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

const GLYPH_SNAKE_HEAD: &str = "██";
const GLYPH_SNAKE_BODY: &str = "▓▓";
const GLYPH_FOOD: &str = "●";
const GLYPH_EMPTY: &str = "  ";

/// Renders the full game frame from an immutable snapshot.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: &GameSnapshot<'_>,
    bounds: GridSize,
    theme: &Theme,
) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);
    let board_area = board_rect(play_area, bounds);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, snapshot, bounds, theme);

    match (snapshot.is_running, snapshot.is_over) {
        (false, false) => render_start_menu(frame, board_area, theme),
        (_, true) => render_game_over_menu(
            frame,
            board_area,
            snapshot.score,
            snapshot.death_reason,
            theme,
        ),
        (true, false) => {}
    }
}

/// Centres a bordered board of `bounds` cells inside `area`.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = bounds.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board
}

fn render_cells(
    frame: &mut Frame<'_>,
    inner: Rect,
    snapshot: &GameSnapshot<'_>,
    bounds: GridSize,
    theme: &Theme,
) {
    let background = Style::new().bg(theme.play_bg);
    let buffer = frame.buffer_mut();

    for (y, row) in project(snapshot, bounds).into_iter().enumerate() {
        for (x, kind) in row.into_iter().enumerate() {
            let Some((column, line)) = cell_to_terminal(inner, x, y) else {
                continue;
            };

            let (glyph, style) = match kind {
                CellKind::Empty => (GLYPH_EMPTY, background),
                CellKind::SnakeHead => (
                    GLYPH_SNAKE_HEAD,
                    background
                        .fg(theme.snake_head)
                        .add_modifier(Modifier::BOLD),
                ),
                CellKind::SnakeBody => (GLYPH_SNAKE_BODY, background.fg(theme.snake_body)),
                CellKind::Food => (GLYPH_FOOD, background.fg(theme.food)),
            };

            buffer.set_string(column, line, GLYPH_EMPTY, background);
            buffer.set_string(column, line, glyph, style);
        }
    }
}

/// Maps a board cell to its top-left terminal position, clipped to `inner`.
fn cell_to_terminal(inner: Rect, x: usize, y: usize) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(y).ok()?;

    let column = inner.x.checked_add(x_offset)?;
    let line = inner.y.checked_add(y_offset)?;
    if column.saturating_add(CELL_COLUMNS) > inner.right() || line >= inner.bottom() {
        return None;
    }

    Some((column, line))
}
