use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::game::{GameMode, Snapshot};
use crate::grid::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_difficulty_menu, render_game_over_menu, render_game_won_menu, render_intro,
    render_overlay, render_pause_menu,
};

/// Terminal columns used for one board cell.
pub const CELL_COLUMNS: u16 = 2;

/// Letters painted on the body segments right behind the head.
const BODY_LETTERS: &str = "SPILL";

const SNAKE_COLOR: Color = Color::Rgb(30, 130, 76);
const SNAKE_ACCENT: Color = Color::Rgb(39, 174, 96);
const FOOD_COLOR: Color = Color::Rgb(200, 0, 0);
const BOARD_BG: Color = Color::Rgb(24, 24, 24);

const GLYPH_HEAD: &str = "██";
const GLYPH_BODY: &str = "▓▓";
const GLYPH_FOOD: &str = "<>";

/// Frame-local values that do not come from the simulation.
#[derive(Debug, Clone, Copy)]
pub struct ViewInfo {
    /// Milliseconds since start-up, drives blinking and strobe effects.
    pub now_ms: u64,
}

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, view: ViewInfo) {
    let area = frame.area();

    match snapshot.mode {
        GameMode::Intro => {
            render_intro(frame, area, view.now_ms);
            return;
        }
        GameMode::DifficultySelect => {
            render_difficulty_menu(frame, area, snapshot);
            return;
        }
        GameMode::Overlay => {
            render_overlay(frame, area, snapshot.overlay_loop_count, view.now_ms);
            return;
        }
        GameMode::Playing | GameMode::Paused | GameMode::GameOver | GameMode::GameWon => {}
    }

    let board_area = render_hud(frame, area, snapshot);
    let board = board_rect(board_area, snapshot);

    let block = Block::bordered()
        .border_style(Style::new().fg(SNAKE_ACCENT))
        .style(Style::new().bg(BOARD_BG));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    match snapshot.mode {
        GameMode::Paused => render_pause_menu(frame, board),
        GameMode::GameOver => render_game_over_menu(frame, board, snapshot.score),
        GameMode::GameWon => render_game_won_menu(frame, board, snapshot),
        _ => {}
    }
}

fn board_rect(area: Rect, snapshot: &Snapshot) -> Rect {
    let width = u16::try_from(snapshot.grid.columns())
        .unwrap_or(u16::MAX)
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2);
    let height = u16::try_from(snapshot.grid.rows())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, board, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(column);

    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some((x, y)) = cell_to_terminal(inner, snapshot, snapshot.food_cell) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new()
            .fg(Color::White)
            .bg(FOOD_COLOR)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let mut letters = BODY_LETTERS.chars();
    let buffer = frame.buffer_mut();

    for (index, cell) in snapshot.snake_cells.iter().rev().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, snapshot, *cell) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_HEAD,
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            );
            continue;
        }

        match letters.next() {
            Some(letter) => buffer.set_string(
                x,
                y,
                format!("{letter} "),
                Style::new()
                    .fg(SNAKE_ACCENT)
                    .bg(SNAKE_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            None => buffer.set_string(x, y, GLYPH_BODY, Style::new().fg(SNAKE_COLOR)),
        }
    }
}

fn cell_to_terminal(inner: Rect, snapshot: &Snapshot, cell: Cell) -> Option<(u16, u16)> {
    if !snapshot.grid.contains(cell) {
        return None;
    }

    let (column, row) = snapshot.grid.lattice(cell);
    let x_offset = u16::try_from(column).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
