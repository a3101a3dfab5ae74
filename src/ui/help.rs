use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::layout::{LABEL, TEXT_PRIMARY};
use crate::ui::popup::{centered_rect, frame_popup};

const BINDINGS: &[(&str, &str)] = &[
    ("F1", "Show this help"),
    ("↑ / ↓", "Move selection"),
    ("Enter", "Send the selected request"),
    ("e", "Edit the selected request"),
    ("n", "New request"),
    ("c", "Clone the selected request"),
    ("Del", "Delete the selected request"),
    ("PgUp / PgDn", "Move the selected request up / down"),
    ("Ctrl+S", "Save the value being edited"),
    ("Ctrl+V", "Paste the clipboard into the edit field"),
    ("Esc", "Close popup / quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    let inner = frame_popup(frame, popup_area, " Help (Esc to close) ", LABEL);

    let mut lines = vec![Line::default()];
    lines.extend(BINDINGS.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(LABEL)),
            Span::styled(*what, Style::default().fg(TEXT_PRIMARY)),
        ])
    }));
    frame.render_widget(Paragraph::new(lines), inner);
}
