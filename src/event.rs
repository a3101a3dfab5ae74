//! Logical key events and the raw-byte decoder that produces them.
//!
//! One read from the terminal yields one [`Key`]. Escape sequences are
//! matched against an ordered rule table; the first pattern the buffer
//! starts with wins. Sequences split across two reads are not reassembled:
//! each read is decoded on its own, so a slow link can turn one keypress
//! into an `Escape` followed by stray characters.

const ESC: u8 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Any single byte without a dedicated meaning, keyed by its raw value.
    Char(u8),
    Enter,
    Backspace,
    Delete,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    /// Function key, 1..=12.
    F(u8),
    Unknown,
}

impl Key {
    pub const CTRL_C: Key = Key::Char(0x03);
    pub const CTRL_S: Key = Key::Char(0x13);
    pub const CTRL_V: Key = Key::Char(0x16);

    /// Printable ASCII carried by this key, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(b) if (0x20..0x7f).contains(b) => Some(*b as char),
            _ => None,
        }
    }
}

/// Escape sequences in priority order.
const ESCAPE_RULES: &[(&[u8], Key)] = &[
    (b"\x1b[A", Key::ArrowUp),
    (b"\x1b[B", Key::ArrowDown),
    (b"\x1b[C", Key::ArrowRight),
    (b"\x1b[D", Key::ArrowLeft),
    (b"\x1b[3~", Key::Delete),
    (b"\x1b[5~", Key::PageUp),
    (b"\x1b[6~", Key::PageDown),
    (b"\x1bOP", Key::F(1)),
    (b"\x1bOQ", Key::F(2)),
    (b"\x1bOR", Key::F(3)),
    (b"\x1bOS", Key::F(4)),
    (b"\x1b[15~", Key::F(5)),
    (b"\x1b[17~", Key::F(6)),
    (b"\x1b[18~", Key::F(7)),
    (b"\x1b[19~", Key::F(8)),
    (b"\x1b[20~", Key::F(9)),
    (b"\x1b[21~", Key::F(10)),
    (b"\x1b[23~", Key::F(11)),
    (b"\x1b[24~", Key::F(12)),
];

/// Decode the bytes of a single read into exactly one key. Never fails.
pub fn decode(bytes: &[u8]) -> Key {
    match bytes {
        [] => Key::Unknown,
        [single] => decode_single(*single),
        [ESC, ..] => ESCAPE_RULES
            .iter()
            .find(|(pattern, _)| bytes.starts_with(pattern))
            .map(|(_, key)| *key)
            .unwrap_or(Key::Unknown),
        _ => Key::Unknown,
    }
}

fn decode_single(byte: u8) -> Key {
    match byte {
        13 | 10 => Key::Enter,
        127 => Key::Backspace,
        ESC => Key::Escape,
        other => Key::Char(other),
    }
}
