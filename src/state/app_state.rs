use super::{mode::Mode, request_state::Field};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub mode: Mode,
    /// Selected request. `None` only while the collection is empty.
    pub list_index: Option<usize>,
    /// Highlighted field in the detail view.
    pub field: Field,
    /// One-line message for the status bar (e.g. the last save failure).
    pub status: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(len: usize) -> Self {
        let mut state = Self::default();
        state.clamp_selection(len);
        state
    }

    /// Re-establish the selection invariant against a collection of `len`.
    pub fn clamp_selection(&mut self, len: usize) {
        self.list_index = match (len, self.list_index) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }
}
