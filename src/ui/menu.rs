use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Difficulty;
use crate::game::Snapshot;

const GAME_TITLE: &str = "Bogie vs Chicken";

/// Title backdrop colors, cycled on the intro screen.
const TITLE_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Magenta,
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
];

/// Period of one title color step in milliseconds.
const TITLE_COLOR_STEP_MS: u64 = 120;

/// Blink period of the overlay captions in milliseconds.
const BLINK_PERIOD_MS: u64 = 200;

/// Draws the intro screen with the flashing title.
pub fn render_intro(frame: &mut Frame<'_>, area: Rect, now_ms: u64) {
    let [_, title_row, _, prompt_row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let step = usize::try_from(now_ms / TITLE_COLOR_STEP_MS).unwrap_or(0);
    let backdrop = TITLE_PALETTE[step % TITLE_PALETTE.len()];
    let title_width = u16::try_from(GAME_TITLE.width()).unwrap_or(u16::MAX) + 8;
    let title_box = center_horizontally(title_row, title_width);

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(GAME_TITLE), Line::from("")])
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(backdrop)
                    .add_modifier(Modifier::BOLD),
            ),
        title_box,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Press SPACE to start"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White)),
        prompt_row,
    );
}

/// Draws the difficulty choices.
pub fn render_difficulty_menu(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let mut lines = vec![
        Line::from("Select Difficulty").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        lines.push(Line::from(format!(
            "[{}] {:<6}  {}s",
            index + 1,
            difficulty.name(),
            difficulty.time_limit_secs()
        )));
    }
    if snapshot.completed_cycles > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Cycle bonus: +{}",
            snapshot.completed_cycles
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[Q] Exit").style(Style::default().fg(Color::DarkGray)));

    render_popup(frame, area, " difficulty ", lines);
}

/// Draws the pause popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q] Exit"),
    ];
    render_popup(frame, area, " pause ", lines);
}

/// Draws the game-over popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let lines = vec![
        Line::from("GAME OVER").style(Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[Space] Play Again"),
        Line::from("[Q] Exit"),
    ];
    render_popup(frame, area, " game over ", lines);
}

/// Draws the round-won popup.
pub fn render_game_won_menu(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let lines = vec![
        Line::from("YOU WIN!").style(Style::default().fg(Color::Green)),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(""),
        Line::from("[Space] Next Level"),
        Line::from("[Q] Exit"),
    ];
    render_popup(frame, area, " victory ", lines);
}

/// Draws one frame of the first-clear cutscene.
pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, loop_count: u32, now_ms: u64) {
    let strobe = strobe_level(now_ms);
    frame.render_widget(
        Block::new().style(Style::default().bg(Color::Rgb(strobe, strobe, strobe))),
        area,
    );

    let [_, top_row, _, bottom_row, _, footer_row] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    if blink_visible(now_ms) {
        let caption = Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(Line::from("YOU ARE THE BEST!"))
                .alignment(Alignment::Center)
                .style(caption.fg(Color::Yellow)),
            top_row,
        );
        frame.render_widget(
            Paragraph::new(Line::from("YOU ARE A DRAGON!"))
                .alignment(Alignment::Center)
                .style(caption.fg(Color::Red)),
            bottom_row,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(format!("loop {loop_count}  ·  [Space] Skip")))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray).bg(Color::Black)),
        footer_row,
    );
}

fn blink_visible(now_ms: u64) -> bool {
    now_ms % BLINK_PERIOD_MS < BLINK_PERIOD_MS / 2
}

fn strobe_level(now_ms: u64) -> u8 {
    let phase = (now_ms as f64 * 0.01).sin().abs();
    (phase * 255.0).round() as u8
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let popup = popup_for_lines(area, &lines);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn popup_for_lines(area: Rect, lines: &[Line<'_>]) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    center_horizontally(mid, width)
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);

    center
}

#[cfg(test)]
mod tests {
    use super::{blink_visible, strobe_level};

    #[test]
    fn captions_blink_at_five_hertz() {
        assert!(blink_visible(0));
        assert!(blink_visible(99));
        assert!(!blink_visible(100));
        assert!(!blink_visible(199));
        assert!(blink_visible(200));
    }

    #[test]
    fn strobe_peaks_a_quarter_period_in() {
        assert_eq!(strobe_level(0), 0);
        assert!(strobe_level(157) > 250);
        assert!(strobe_level(314) < 5);
    }
}
