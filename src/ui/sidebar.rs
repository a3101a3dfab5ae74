use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use crate::state::request_state::RequestRecord;
use super::layout::{ACCENT_BLUE, BORDER_INACTIVE, SELECTED_BG, TEXT_MUTED, TEXT_PRIMARY};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, requests: &[RequestRecord]) {
    let focused = matches!(state.mode, Mode::Browsing);
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };

    let block = Block::default()
        .title(format!(" Requests ({}) ", requests.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if requests.is_empty() {
        let hint = Line::from(Span::styled("No requests · n to add", Style::default().fg(TEXT_MUTED)));
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    }

    // Keep the selection visible in long lists.
    let visible = area.height.saturating_sub(2) as usize;
    let selected = state.list_index.unwrap_or(0);
    let offset = (selected + 1).saturating_sub(visible.max(1));

    let lines: Vec<Line> = requests
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, request)| {
            let style = if Some(i) == state.list_index {
                Style::default().fg(Color::Black).bg(SELECTED_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            Line::from(Span::styled(request.name.as_str(), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
