use super::response_state::ResponseView;

/// Modal context of the interactive loop.
///
/// Editing variants own the text being typed, so a buffer only exists
/// while one of them is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    FieldSelect,
    EditingField { buffer: String },
    HeaderEditor,
    EditingHeaderAdd { buffer: String },
    EditingHeaderDelete { buffer: String },
    ResponseView { response: ResponseView, scroll: usize },
    Help { previous: Box<Mode> },
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Browsing => "BROWSE",
            Mode::FieldSelect => "SELECT",
            Mode::EditingField { .. } => "EDIT",
            Mode::HeaderEditor => "HEADERS",
            Mode::EditingHeaderAdd { .. } => "ADD HEADER",
            Mode::EditingHeaderDelete { .. } => "DEL HEADER",
            Mode::ResponseView { .. } => "RESPONSE",
            Mode::Help { .. } => "HELP",
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            Mode::EditingField { buffer }
            | Mode::EditingHeaderAdd { buffer }
            | Mode::EditingHeaderDelete { buffer } => Some(buffer),
            _ => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Mode::EditingField { buffer }
            | Mode::EditingHeaderAdd { buffer }
            | Mode::EditingHeaderDelete { buffer } => Some(buffer),
            _ => None,
        }
    }
}
