use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::response_state::ResponseView;
use crate::ui::layout::{ACCENT_BLUE, LABEL, TEXT_PRIMARY};
use crate::ui::popup::frame_popup;

const STATUS_OK: Color = Color::Rgb(158, 206, 106);
const STATUS_ERR: Color = Color::Rgb(247, 118, 142);

pub fn render(frame: &mut Frame, area: Rect, response: &ResponseView, scroll: usize) {
    let popup_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let inner = frame_popup(frame, popup_area, " Response (↑↓ PgUp/PgDn scroll · Esc close) ", ACCENT_BLUE);

    let status_color = if response.is_success() { STATUS_OK } else { STATUS_ERR };
    let lines: Vec<Line> = response
        .lines()
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == 0 {
                Style::default().fg(status_color)
            } else if text.starts_with("    ") || text == "Response Headers:" {
                Style::default().fg(LABEL)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let scroll = scroll.min(u16::MAX as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
