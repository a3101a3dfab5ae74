//! Key handling as a pure function of `(AppState, Key, requests)`.
//!
//! `step` never touches the store or the network. It returns the next
//! state together with at most one [`Effect`] for the caller to carry out.

use tracing::debug;

use crate::event::Key;

use super::{
    app_state::AppState,
    mode::Mode,
    request_state::{Field, RequestRecord},
};

const PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreMutation {
    Add(RequestRecord),
    Clone(usize),
    Delete(usize),
    MoveUp(usize),
    MoveDown(usize),
    SetField { index: usize, field: Field, value: String },
    UpsertHeader { index: usize, key: String, value: String },
    RemoveHeader { index: usize, key: String },
    /// Save without changing anything.
    Persist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Mutate(StoreMutation),
    /// Fire the request at this index and show the result.
    Dispatch(usize),
    /// Replace the active edit buffer with the clipboard contents.
    Paste,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: AppState,
    pub effect: Option<Effect>,
}

pub fn step(mut state: AppState, key: Key, requests: &[RequestRecord]) -> Step {
    if key == Key::Unknown {
        return Step { state, effect: None };
    }

    let mode = std::mem::take(&mut state.mode);
    if key == Key::F(1) && !matches!(mode, Mode::Help { .. }) {
        state.mode = Mode::Help { previous: Box::new(mode) };
        return Step { state, effect: None };
    }

    let selected = state.list_index.filter(|&i| i < requests.len());
    let effect = match mode {
        Mode::Browsing => browsing(&mut state, key, selected, requests.len()),
        Mode::FieldSelect => field_select(&mut state, key, selected, requests),
        Mode::EditingField { mut buffer } => match (key, selected) {
            (Key::Escape, _) => {
                state.mode = Mode::FieldSelect;
                None
            }
            (Key::Enter, Some(index)) | (Key::CTRL_S, Some(index)) => {
                state.mode = Mode::FieldSelect;
                Some(Effect::Mutate(StoreMutation::SetField {
                    index,
                    field: state.field,
                    value: buffer.trim().to_string(),
                }))
            }
            _ => {
                let effect = edit_text(&mut buffer, key);
                state.mode = Mode::EditingField { buffer };
                effect
            }
        },
        Mode::HeaderEditor => match key {
            Key::Char(b'a') => {
                state.mode = Mode::EditingHeaderAdd { buffer: String::new() };
                None
            }
            Key::Char(b'd') => {
                let has_headers = selected
                    .map(|i| !requests[i].headers.is_empty())
                    .unwrap_or(false);
                state.mode = if has_headers {
                    Mode::EditingHeaderDelete { buffer: String::new() }
                } else {
                    Mode::HeaderEditor
                };
                None
            }
            Key::CTRL_S | Key::Escape => {
                state.mode = Mode::FieldSelect;
                Some(Effect::Mutate(StoreMutation::Persist))
            }
            _ => {
                state.mode = Mode::HeaderEditor;
                None
            }
        },
        Mode::EditingHeaderAdd { mut buffer } => match key {
            Key::Escape => {
                state.mode = Mode::HeaderEditor;
                None
            }
            Key::Enter => {
                state.mode = Mode::HeaderEditor;
                match (selected, parse_header(&buffer)) {
                    (Some(index), Some((key, value))) => {
                        Some(Effect::Mutate(StoreMutation::UpsertHeader { index, key, value }))
                    }
                    _ => None,
                }
            }
            _ => {
                let effect = edit_text(&mut buffer, key);
                state.mode = Mode::EditingHeaderAdd { buffer };
                effect
            }
        },
        Mode::EditingHeaderDelete { mut buffer } => match key {
            Key::Escape => {
                state.mode = Mode::HeaderEditor;
                None
            }
            Key::Enter => {
                state.mode = Mode::HeaderEditor;
                selected.map(|index| {
                    Effect::Mutate(StoreMutation::RemoveHeader {
                        index,
                        key: buffer.trim().to_string(),
                    })
                })
            }
            _ => {
                let effect = edit_text(&mut buffer, key);
                state.mode = Mode::EditingHeaderDelete { buffer };
                effect
            }
        },
        Mode::ResponseView { response, scroll } => {
            let last = response.line_count().saturating_sub(1);
            let scroll = match key {
                Key::ArrowUp => scroll.saturating_sub(1),
                Key::ArrowDown => (scroll + 1).min(last),
                Key::PageUp => scroll.saturating_sub(PAGE),
                Key::PageDown => (scroll + PAGE).min(last),
                _ => scroll,
            };
            state.mode = if key == Key::Escape {
                Mode::Browsing
            } else {
                Mode::ResponseView { response, scroll }
            };
            None
        }
        Mode::Help { previous } => {
            state.mode = if key == Key::Escape {
                *previous
            } else {
                Mode::Help { previous }
            };
            None
        }
    };

    debug!(?key, mode = state.mode.label(), ?effect, "transition");
    Step { state, effect }
}

fn browsing(
    state: &mut AppState,
    key: Key,
    selected: Option<usize>,
    len: usize,
) -> Option<Effect> {
    state.mode = Mode::Browsing;
    match (key, selected) {
        (Key::Escape, _) | (Key::CTRL_C, _) => {
            state.should_quit = true;
            Some(Effect::Quit)
        }
        (Key::Char(b'n'), _) => {
            state.list_index = Some(len);
            Some(Effect::Mutate(StoreMutation::Add(RequestRecord::new("New Request"))))
        }
        (_, None) => None,
        (Key::ArrowDown, Some(i)) => {
            state.list_index = Some((i + 1).min(len - 1));
            None
        }
        (Key::ArrowUp, Some(i)) => {
            state.list_index = Some(i.saturating_sub(1));
            None
        }
        (Key::Enter, Some(i)) => Some(Effect::Dispatch(i)),
        (Key::Char(b'e'), Some(_)) => {
            state.mode = Mode::FieldSelect;
            state.field = Field::Name;
            None
        }
        (Key::Char(b'c'), Some(i)) => Some(Effect::Mutate(StoreMutation::Clone(i))),
        (Key::Delete, Some(i)) => {
            state.list_index = if len == 1 { None } else { Some(i.min(len - 2)) };
            Some(Effect::Mutate(StoreMutation::Delete(i)))
        }
        (Key::PageUp, Some(i)) if i > 0 => {
            state.list_index = Some(i - 1);
            Some(Effect::Mutate(StoreMutation::MoveUp(i)))
        }
        (Key::PageDown, Some(i)) if i + 1 < len => {
            state.list_index = Some(i + 1);
            Some(Effect::Mutate(StoreMutation::MoveDown(i)))
        }
        _ => None,
    }
}

fn field_select(
    state: &mut AppState,
    key: Key,
    selected: Option<usize>,
    requests: &[RequestRecord],
) -> Option<Effect> {
    state.mode = Mode::FieldSelect;
    match key {
        Key::ArrowDown => state.field = state.field.next(),
        Key::ArrowUp => state.field = state.field.prev(),
        Key::Escape => state.mode = Mode::Browsing,
        Key::Enter => {
            if let Some(record) = selected.map(|i| &requests[i]) {
                state.mode = match record.field_value(state.field) {
                    Some(value) => Mode::EditingField { buffer: value.to_string() },
                    None => Mode::HeaderEditor,
                };
            }
        }
        _ => {}
    }
    None
}

/// Apply a text-entry key to `buffer`.
fn edit_text(buffer: &mut String, key: Key) -> Option<Effect> {
    match key {
        Key::CTRL_V => return Some(Effect::Paste),
        Key::Backspace => {
            buffer.pop();
        }
        other => {
            if let Some(c) = other.printable() {
                buffer.push(c);
            }
        }
    }
    None
}

/// Split `Key: Value` on the first colon. The key must be non-empty.
pub fn parse_header(input: &str) -> Option<(String, String)> {
    let (key, value) = input.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}
