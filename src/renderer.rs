use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::{CELL_WIDTH, GLYPH_CELL};
use crate::game::{EndReason, GameState};
use crate::grid::{Cell, Grid};

const POPUP_WIDTH: u16 = 22;
const POPUP_HEIGHT: u16 = 8;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [score_row, field_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score())))
            .style(Style::new().fg(Color::White)),
        score_row,
    );

    let play_area = field_area(field_row, state.grid());
    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    if let Some(reason) = state.end_reason() {
        render_game_over(frame, play_area, state.score(), reason);
    }
}

fn field_area(area: Rect, grid: Grid) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: (grid.width().saturating_mul(CELL_WIDTH).saturating_add(2)).min(area.width),
        height: (grid.height().saturating_add(2)).min(area.height),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = cell_to_terminal(inner, state.grid(), state.food().position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake().head();

    let buffer = frame.buffer_mut();
    for segment in state.snake().segments() {
        let Some((x, y)) = cell_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(Color::Green)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn render_game_over(frame: &mut Frame<'_>, area: Rect, score: u32, reason: EndReason) {
    let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(match reason {
            EndReason::SelfCollision => "GAME OVER!",
            EndReason::BoardFilled => "BOARD FILLED!",
        }),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[R] Restart"),
        Line::from("[Esc]/[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::White))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(mid);

    center
}

fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
