use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode_color = match state.mode {
        Mode::Browsing => Color::Rgb(122, 162, 247),                    // blue
        Mode::FieldSelect | Mode::HeaderEditor => Color::Rgb(187, 154, 247), // purple
        Mode::EditingField { .. }
        | Mode::EditingHeaderAdd { .. }
        | Mode::EditingHeaderDelete { .. } => Color::Rgb(158, 206, 106), // green
        Mode::ResponseView { .. } | Mode::Help { .. } => Color::Rgb(224, 175, 104), // orange
    };

    let mode_span = Span::styled(
        format!(" {} ", state.mode.label()),
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    );

    let rest = match &state.status {
        Some(msg) => Span::styled(format!("  {}", msg), Style::default().fg(Color::Rgb(247, 118, 142))),
        None => Span::styled(
            "  · F1:help · ↑↓:move · Enter:send · e:edit · n:new · c:clone · Del:delete · Esc:quit",
            Style::default().fg(Color::Rgb(65, 72, 104)),
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(vec![mode_span, rest])), area);
}
