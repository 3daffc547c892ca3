use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::{GameMode, Snapshot};

const HUD_SEPARATOR: &str = " │ ";

/// Seconds left at which the timer turns red.
const TIME_WARNING_SECS: u64 = 10;

/// Renders the info rows and returns the remaining area below them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) -> Rect {
    let [info_area, help_area, play_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        info_area,
    );

    let help = match snapshot.mode {
        GameMode::Paused => "[P] Resume  [Q] Exit",
        GameMode::Playing => "[Arrows/WASD] Steer  [P] Pause  [Q] Exit",
        _ => "[Space] Continue  [Q] Exit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(help))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    play_area
}

fn info_line(snapshot: &Snapshot) -> Line<'static> {
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let time_left = snapshot.time_left_secs();
    let time_style = if time_left <= TIME_WARNING_SECS {
        value.fg(Color::Red)
    } else {
        value
    };

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(snapshot.score.to_string(), value),
        Span::raw(HUD_SEPARATOR),
        Span::raw("Time left: "),
        Span::styled(format!("{time_left}s"), time_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw("Difficulty: "),
        Span::styled(
            format!("{} +{}", snapshot.difficulty, snapshot.completed_cycles),
            value,
        ),
    ])
}
