use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use crate::state::request_state::{Field, RequestRecord};
use super::layout::{ACCENT_BLUE, BORDER_INACTIVE, LABEL, SELECTED_BG, TEXT_MUTED, TEXT_PRIMARY};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, request: Option<&RequestRecord>) {
    let focused = state.mode == Mode::FieldSelect;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let Some(request) = request else {
        let hint = Line::from(Span::styled("No requests", Style::default().fg(TEXT_MUTED)));
        frame.render_widget(Paragraph::new(hint).block(block), area);
        return;
    };

    let highlight = |field: Field| focused && state.field == field;
    let label_style = |field: Field| {
        if highlight(field) {
            Style::default().fg(Color::Black).bg(SELECTED_BG)
        } else {
            Style::default().fg(LABEL)
        }
    };
    let value_style = |field: Field| {
        if highlight(field) {
            Style::default().fg(Color::Black).bg(SELECTED_BG)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        }
    };

    let mut lines = Vec::new();
    for field in [Field::Name, Field::Method, Field::Url] {
        let value = request.field_value(field).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label()), label_style(field)),
            Span::styled(value, value_style(field)),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Body:", label_style(Field::Body))));
    lines.extend(
        request
            .body
            .lines()
            .map(|l| Line::from(Span::styled(l, value_style(Field::Body)))),
    );
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Headers:", label_style(Field::Headers))));
    if request.headers.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", Style::default().fg(TEXT_MUTED))));
    }
    for (key, value) in &request.headers {
        lines.push(Line::from(Span::styled(
            format!("  {}: {}", key, value),
            value_style(Field::Headers),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
