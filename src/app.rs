use tracing::{info, warn};

use crate::error::AppError;
use crate::event::Key;
use crate::http::dispatch::Dispatcher;
use crate::http::executor::Transport;
use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use crate::state::transition::{self, Effect, Step, StoreMutation};
use crate::storage::store::RequestStore;

pub struct App<T> {
    pub state: AppState,
    pub store: RequestStore,
    dispatcher: Dispatcher<T>,
    clipboard: Option<arboard::Clipboard>,
}

impl<T: Transport> App<T> {
    pub fn new(store: RequestStore, dispatcher: Dispatcher<T>) -> Self {
        Self {
            state: AppState::new(store.len()),
            store,
            dispatcher,
            clipboard: None,
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        let state = std::mem::take(&mut self.state);
        let Step { state, effect } = transition::step(state, key, self.store.requests());
        self.state = state;
        if let Some(effect) = effect {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Mutate(mutation) => {
                let saved = self.mutate(mutation);
                self.state.clamp_selection(self.store.len());
                self.state.status = match saved {
                    Ok(()) => None,
                    Err(e) => Some(format!("Save failed: {}", e)),
                };
            }
            Effect::Dispatch(index) => {
                if let Some(record) = self.store.get(index) {
                    let response = self.dispatcher.dispatch(record);
                    self.state.mode = Mode::ResponseView { response, scroll: 0 };
                }
            }
            Effect::Paste => match self.clipboard_text() {
                Ok(text) => self.paste(text),
                Err(e) => {
                    warn!(error = %e, "clipboard unavailable");
                    self.state.status = Some(format!("Clipboard unavailable: {}", e));
                }
            },
            Effect::Quit => info!("quit requested"),
        }
    }

    fn mutate(&mut self, mutation: StoreMutation) -> Result<(), AppError> {
        match mutation {
            StoreMutation::Add(record) => self.store.add(record).saved,
            StoreMutation::Clone(index) => self.store.clone(index).saved,
            StoreMutation::Delete(index) => self.store.delete(index).saved,
            StoreMutation::MoveUp(index) => self.store.move_up(index).saved,
            StoreMutation::MoveDown(index) => self.store.move_down(index).saved,
            StoreMutation::SetField { index, field, value } => {
                self.store.set_field(index, field, value).saved
            }
            StoreMutation::UpsertHeader { index, key, value } => {
                self.store.upsert_header(index, key, value).saved
            }
            StoreMutation::RemoveHeader { index, key } => {
                self.store.remove_header(index, &key).saved
            }
            StoreMutation::Persist => self.store.save(),
        }
    }

    /// Replace the active edit buffer, if any, with the first line of
    /// `text`. Control characters are dropped like untyped keys.
    fn paste(&mut self, text: String) {
        if let Some(buffer) = self.state.mode.buffer_mut() {
            *buffer = text
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .filter(|c| !c.is_control())
                .collect();
        }
    }

    fn clipboard_text(&mut self) -> Result<String, arboard::Error> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let text = clipboard.get_text();
        self.clipboard = Some(clipboard);
        text
    }
}
