use std::io::{self, Read, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{decode, Key};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Longest sequence the decoder recognizes (`ESC [ 2 4 ~`).
const READ_SIZE: usize = 5;

pub fn init() -> io::Result<Tui> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Put the terminal back before the panic message is printed.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));
}

/// Block for one read and decode it into a single key.
///
/// End of input is an `UnexpectedEof` error: the terminal is gone.
pub fn read_key(input: &mut impl Read) -> io::Result<Key> {
    let mut buf = [0u8; READ_SIZE];
    let n = input.read(&mut buf)?;
    if n == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
    }
    Ok(decode(&buf[..n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_key_decodes_one_read() {
        let mut input: &[u8] = &[27, 91, 50, 52, 126];
        assert_eq!(read_key(&mut input).unwrap(), Key::F(12));
    }

    #[test]
    fn test_read_key_eof_is_an_error() {
        let mut input: &[u8] = &[];
        for _ in 0..3 {
            let err = read_key(&mut input).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        }
    }

    #[test]
    fn test_read_key_is_bounded() {
        // Six bytes arrive at once; only the first five are decoded together.
        let mut input: &[u8] = b"abcdef";
        assert_eq!(read_key(&mut input).unwrap(), Key::Unknown);
        assert_eq!(read_key(&mut input).unwrap(), Key::Char(b'f'));
    }
}
