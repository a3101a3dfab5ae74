use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::{ACCENT_BLUE, BG, TEXT_PRIMARY};

/// Returns a centered `Rect` that is `percent_x`% wide and `percent_y`% tall
/// relative to `area`. Minimum 1×1.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_w = (area.width as u32 * percent_x as u32 / 100).max(1) as u16;
    let popup_h = (area.height as u32 * percent_y as u32 / 100).max(1) as u16;

    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;

    Rect { x, y, width: popup_w.min(area.width), height: popup_h.min(area.height) }
}

/// Clear `area` and draw a framed popup; returns the inner rect.
pub fn frame_popup(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title.to_string())
        .style(Style::default().bg(BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Single text-entry popup showing the edit buffer with a cursor at its end.
pub fn render_input(frame: &mut Frame, area: Rect, title: &str, buffer: &str) {
    let popup_area = centered_rect(70, 30, area);
    let popup_area = Rect { height: popup_area.height.clamp(3, 8), ..popup_area };
    let inner = frame_popup(frame, popup_area, title, ACCENT_BLUE);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let input_line = Line::from(vec![
        Span::styled(buffer, Style::default().fg(TEXT_PRIMARY)),
        Span::styled("_", Style::default().bg(Color::White).fg(Color::Black)),
    ]);
    frame.render_widget(Paragraph::new(input_line).wrap(Wrap { trim: false }), inner);

    let len = buffer.chars().count() as u16;
    let (dx, dy) = (len % inner.width, len / inner.width);
    if dy < inner.height {
        frame.set_cursor_position(Position { x: inner.x + dx, y: inner.y + dy });
    }
}
