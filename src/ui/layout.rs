use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use crate::state::request_state::RequestRecord;
use super::{details, headers_editor, help, popup, response_viewer, sidebar, status_bar};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);  // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const BG: Color = Color::Rgb(26, 27, 38);               // #1a1b26
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);
pub const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245);
pub const LABEL: Color = Color::Rgb(224, 175, 104);
pub const SELECTED_BG: Color = Color::Rgb(224, 175, 104);

pub fn render(frame: &mut Frame, state: &AppState, requests: &[RequestRecord]) {
    let area = frame.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" hop ", Style::default().fg(BG).bg(ACCENT_BLUE).add_modifier(Modifier::BOLD)),
        Span::styled("  saved HTTP requests", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(title), vertical[0]);

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Min(0)])
        .split(vertical[1]);

    let selected = state.list_index.and_then(|i| requests.get(i));
    sidebar::render(frame, horiz[0], state, requests);
    details::render(frame, horiz[1], state, selected);
    status_bar::render(frame, vertical[2], state);

    // Overlays are drawn last so they sit on top.
    render_overlay(frame, &state.mode, selected);
}

fn render_overlay(frame: &mut Frame, mode: &Mode, selected: Option<&RequestRecord>) {
    let area = frame.area();
    if let Some(buffer) = mode.buffer() {
        let title = match mode {
            Mode::EditingHeaderAdd { .. } => " New Header (Key: Value) ",
            Mode::EditingHeaderDelete { .. } => " Delete Header (name) ",
            _ => " Edit Value (Enter/Ctrl+S save · Esc cancel · Ctrl+V paste) ",
        };
        if !matches!(mode, Mode::EditingField { .. }) {
            headers_editor::render(frame, area, selected);
        }
        popup::render_input(frame, area, title, buffer);
        return;
    }

    match mode {
        Mode::HeaderEditor => headers_editor::render(frame, area, selected),
        Mode::ResponseView { response, scroll } => {
            response_viewer::render(frame, area, response, *scroll);
        }
        Mode::Help { previous } => {
            render_overlay(frame, previous, selected);
            help::render(frame, area);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &AppState, requests: &[RequestRecord]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state, requests)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample() -> Vec<RequestRecord> {
        let mut first = RequestRecord::new("List users");
        first.url = "http://localhost:3000/users".into();
        first.headers.insert("Accept".into(), "application/json".into());
        vec![first, RequestRecord::new("Create user")]
    }

    #[test]
    fn test_browsing_shows_list_and_details() {
        let requests = sample();
        let screen = draw(&AppState::new(requests.len()), &requests);
        assert!(screen.contains("List users"));
        assert!(screen.contains("Create user"));
        assert!(screen.contains("http://localhost:3000/users"));
        assert!(screen.contains("Accept: application/json"));
        assert!(screen.contains("BROWSE"));
    }

    #[test]
    fn test_empty_collection_placeholder() {
        let screen = draw(&AppState::new(0), &[]);
        assert!(screen.contains("No requests"));
    }

    #[test]
    fn test_overlays_render() {
        let requests = sample();
        let mut state = AppState::new(requests.len());

        state.mode = Mode::EditingHeaderAdd { buffer: "X-Test: 4".into() };
        let screen = draw(&state, &requests);
        assert!(screen.contains("X-Test: 4"));
        assert!(screen.contains("Headers"));

        state.mode = Mode::Help { previous: Box::new(Mode::Browsing) };
        assert!(draw(&state, &requests).contains("Help"));
    }
}
