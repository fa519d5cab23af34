use crate::session::CancellationToken;
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

/// Blocks until a line arrives on `reader`, then cancels `token`.
///
/// Returns `false` when the input closed without a line; the token is left
/// untouched in that case.
pub fn watch_for_stop<R: BufRead>(mut reader: R, token: &CancellationToken) -> bool {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(n) if n > 0 => {
            token.cancel();
            true
        }
        _ => false,
    }
}

/// Cancels `token` when Enter is pressed. The thread is detached; it ends
/// with the process if no line ever comes.
pub fn spawn_stdin_watch(token: CancellationToken) -> JoinHandle<bool> {
    thread::spawn(move || watch_for_stop(io::stdin().lock(), &token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn a_line_cancels() {
        let token = CancellationToken::new();
        assert!(watch_for_stop(Cursor::new("\n"), &token));
        assert!(token.is_cancelled());
    }

    #[test]
    fn closed_input_does_not_cancel() {
        let token = CancellationToken::new();
        assert!(!watch_for_stop(Cursor::new(""), &token));
        assert!(!token.is_cancelled());
    }
}
