use std::iter::Peekable;

/// A character source with one character of lookahead and one of pushback.
///
/// Wraps any character iterator, so files read into memory, network
/// buffers and string literals all work the same way. The pushback slot
/// holds a single character: it must be drained by `next_char` before
/// `push_back` may be called again.
pub struct CharSource<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    pushback: Option<char>,
}

impl<I: Iterator<Item = char>> CharSource<I> {
    pub fn new(chars: I) -> CharSource<I> {
        CharSource {
            chars: chars.peekable(),
            pushback: None,
        }
    }

    /// Pulls the next character, draining the pushback slot first.
    pub fn next_char(&mut self) -> Option<char> {
        match self.pushback.take() {
            Some(c) => Some(c),
            None => self.chars.next(),
        }
    }

    /// Looks at the next character without consuming it.
    pub fn peek_char(&mut self) -> Option<char> {
        match self.pushback {
            Some(c) => Some(c),
            None => self.chars.peek().copied(),
        }
    }

    /// Restores one consumed character so the next read returns it again.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already occupied: pushing back two characters
    /// without a consume in between is a bug in the caller, not input the
    /// source can represent.
    pub fn push_back(&mut self, c: char) {
        assert!(
            self.pushback.is_none(),
            "CharSource supports a single character of pushback"
        );
        self.pushback = Some(c);
    }
}
