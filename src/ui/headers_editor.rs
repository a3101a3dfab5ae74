use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::request_state::RequestRecord;
use crate::ui::layout::{ACCENT_BLUE, BORDER_INACTIVE, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::popup::{centered_rect, frame_popup};

pub fn render(frame: &mut Frame, area: Rect, request: Option<&RequestRecord>) {
    let popup_area = centered_rect(60, 50, area);
    let inner = frame_popup(frame, popup_area, " Edit Headers ", ACCENT_BLUE);
    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = Vec::new();
    match request {
        Some(r) if !r.headers.is_empty() => {
            for (key, value) in &r.headers {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", key), Style::default().fg(ACCENT_BLUE)),
                    Span::styled(format!(": {}", value), Style::default().fg(TEXT_PRIMARY)),
                ]));
            }
        }
        _ => lines.push(Line::from(Span::styled(
            "  (none) · press a to add a header",
            Style::default().fg(TEXT_MUTED),
        ))),
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(BORDER_INACTIVE),
        ))),
        chunks[1],
    );

    let hint = Line::from(vec![
        Span::styled("a", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" add  ", Style::default().fg(TEXT_MUTED)),
        Span::styled("d", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" delete  ", Style::default().fg(TEXT_MUTED)),
        Span::styled("Ctrl+S/Esc", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" save & close", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[2],
    );
}
