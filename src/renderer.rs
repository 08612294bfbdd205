use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GameConfig, GlyphSet};
use crate::game::{GameState, RunState};
use crate::snake::Position;
use crate::theme::Theme;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
///
/// One terminal cell per grid cell: pixel positions are divided by
/// `cell_size` on the way to the screen.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme, glyphs: &GlyphSet) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);
    let board = board_rect(play_area, state.config());

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border).bg(theme.field_bg))
        .style(Style::new().bg(theme.field_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_grid(frame, inner, state.config(), theme, glyphs);
    render_food(frame, inner, state, theme, glyphs);
    render_snake(frame, inner, state, theme, glyphs);

    if state.run_state == RunState::GameOver {
        render_game_over_menu(frame, play_area, state.score, state.death_reason, theme);
    }
}

/// Centers the bordered board inside `area`, clamped to what fits.
fn board_rect(area: Rect, config: &GameConfig) -> Rect {
    let want_width = u16::try_from(config.columns()).unwrap_or(u16::MAX).saturating_add(2);
    let want_height = u16::try_from(config.rows()).unwrap_or(u16::MAX).saturating_add(2);
    let width = want_width.min(area.width);
    let height = want_height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Marks every cell with a dim dot, the terminal stand-in for the classic
/// dashed grid lines. Food and snake glyphs overdraw it.
fn render_grid(
    frame: &mut Frame<'_>,
    inner: Rect,
    config: &GameConfig,
    theme: &Theme,
    glyphs: &GlyphSet,
) {
    let style = Style::new().fg(theme.grid_dot).bg(theme.field_bg);
    let columns = u16::try_from(config.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(config.rows()).unwrap_or(u16::MAX);
    let buffer = frame.buffer_mut();

    for row in 0..rows.min(inner.height) {
        for column in 0..columns.min(inner.width) {
            buffer.set_string(inner.x + column, inner.y + row, glyphs.grid_dot, style);
        }
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    inner: Rect,
    state: &GameState,
    theme: &Theme,
    glyphs: &GlyphSet,
) {
    let Some((x, y)) = logical_to_terminal(inner, state.config(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, glyphs.food, Style::new().fg(theme.food).bg(theme.field_bg));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    state: &GameState,
    theme: &Theme,
    glyphs: &GlyphSet,
) {
    let head = state.snake.head();
    let buffer = frame.buffer_mut();

    // Tail-to-head order so the head glyph wins over any segment that shares
    // its cell (the overlapping spawn stack, or the collision frame).
    let segments: Vec<Position> = state.snake.segments().copied().collect();
    for segment in segments.iter().rev() {
        let Some((x, y)) = logical_to_terminal(inner, state.config(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                glyphs.snake_head,
                Style::new()
                    .fg(theme.snake_head)
                    .bg(theme.field_bg)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(
                x,
                y,
                glyphs.snake_body,
                Style::new().fg(theme.snake_body).bg(theme.field_bg),
            );
        }
    }
}

fn logical_to_terminal(inner: Rect, config: &GameConfig, position: Position) -> Option<(u16, u16)> {
    if !config.contains(position) {
        return None;
    }

    let column = u16::try_from(position.x / config.cell_size).ok()?;
    let row = u16::try_from(position.y / config.cell_size).ok()?;

    let x = inner.x.saturating_add(column);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
