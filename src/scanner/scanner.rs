use crate::{
    errors::errors::{lex_error, Error, ErrorImpl},
    Position, MK_ERROR_TOKEN, MK_TOKEN,
};

use super::{
    source::CharSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Longest lexeme the scanner accumulates before reporting an overflow.
///
/// The buffers themselves grow on demand; the limit is a reporting policy
/// kept at 255 usable characters.
pub const MAX_LEXEME_LEN: usize = 255;

/// A stateful cursor over a character source, producing one token per
/// `next_token` call.
///
/// The scanner owns the line/column counters and the pushback slot;
/// independent sources get independent scanners with no shared mutable
/// state.
pub struct Scanner<I: Iterator<Item = char>> {
    source: CharSource<I>,
    position: Position,
    prev_position: Position,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(chars: I) -> Scanner<I> {
        Scanner {
            source: CharSource::new(chars),
            position: Position::new(1, 1),
            prev_position: Position::new(1, 1),
        }
    }

    /// Consumes one character, advancing the line/column counters.
    fn next_char(&mut self) -> Option<char> {
        let c = self.source.next_char()?;
        self.prev_position = self.position;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.source.peek_char()
    }

    /// Restores the last consumed character, rolling the line/column
    /// counters back with it.
    fn retract(&mut self, c: char) {
        self.source.push_back(c);
        self.position = self.prev_position;
    }

    /// Consumes whitespace up to the next significant character.
    /// Returns whether anything was consumed.
    fn skip_whitespace(&mut self) -> bool {
        let mut progressed = false;
        while let Some(c) = self.next_char() {
            if is_whitespace(c) {
                progressed = true;
            } else {
                self.retract(c);
                break;
            }
        }
        progressed
    }

    /// Skips a `//` comment up to (but not including) the terminating
    /// newline. A `/` not followed by a second `/` is left untouched.
    /// Returns whether anything was consumed.
    fn skip_comment(&mut self) -> bool {
        if self.peek_char() != Some('/') {
            return false;
        }
        let slash = match self.next_char() {
            Some(c) => c,
            None => return false,
        };
        if self.peek_char() == Some('/') {
            self.next_char();
            while let Some(c) = self.next_char() {
                if c == '\n' {
                    self.retract(c);
                    break;
                }
            }
            true
        } else {
            self.retract(slash);
            false
        }
    }

    /// Produces the next token from the source.
    ///
    /// Lexical errors are reported on the diagnostic channel and returned
    /// as Error tokens; the scanner stays usable afterwards. Once the
    /// source is exhausted every further call returns the end-of-file
    /// token again.
    pub fn next_token(&mut self) -> Token {
        loop {
            let skipped_whitespace = self.skip_whitespace();
            let skipped_comment = self.skip_comment();
            if !skipped_whitespace && !skipped_comment {
                break;
            }
        }

        let c = match self.next_char() {
            Some(c) => c,
            None => return MK_TOKEN!(TokenKind::EndOfFile, String::new(), Position::null()),
        };

        // Every handler consumes its own first character.
        self.retract(c);

        if c.is_ascii_alphabetic() {
            self.handle_identifier_or_keyword()
        } else if c.is_ascii_digit() {
            self.handle_number()
        } else if is_quote_char(c) {
            self.handle_string()
        } else if is_operator_char(c) {
            self.handle_operator()
        } else if is_delimiter_char(c) {
            self.handle_delimiter()
        } else {
            let position = self.position;
            self.next_char();
            MK_ERROR_TOKEN!(
                ErrorImpl::UnrecognisedCharacter { character: c },
                c.to_string(),
                position
            )
        }
    }

    /// Reads a maximal run of letters, digits and underscores, then
    /// decides between a keyword and an identifier.
    fn handle_identifier_or_keyword(&mut self) -> Token {
        let start = self.position;
        let mut lexeme = String::new();

        while let Some(c) = self.next_char() {
            if is_identifier_continue(c) {
                if lexeme.len() >= MAX_LEXEME_LEN {
                    self.drain_run(is_identifier_continue);
                    return MK_ERROR_TOKEN!(
                        ErrorImpl::IdentifierTooLong {
                            limit: MAX_LEXEME_LEN
                        },
                        String::new(),
                        start
                    );
                }
                lexeme.push(c);
            } else {
                self.retract(c);
                break;
            }
        }

        if RESERVED_LOOKUP.contains(lexeme.as_str()) {
            MK_TOKEN!(TokenKind::Keyword, lexeme, start)
        } else {
            MK_TOKEN!(TokenKind::Identifier, lexeme, start)
        }
    }

    /// Reads digits with at most one decimal point. A second dot ends
    /// the number and is left for the next token.
    fn handle_number(&mut self) -> Token {
        let start = self.position;
        let mut lexeme = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.next_char() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                if lexeme.len() >= MAX_LEXEME_LEN {
                    self.drain_run(is_number_continue);
                    return MK_ERROR_TOKEN!(
                        ErrorImpl::NumberTooLong {
                            limit: MAX_LEXEME_LEN
                        },
                        String::new(),
                        start
                    );
                }
                if c == '.' {
                    seen_dot = true;
                }
                lexeme.push(c);
            } else {
                self.retract(c);
                break;
            }
        }

        MK_TOKEN!(TokenKind::Number, lexeme, start)
    }

    /// Reads a string literal delimited by `"` or `'`. The literal must
    /// close with the same character that opened it; there is no escape
    /// processing, so the quote character cannot appear in the content.
    fn handle_string(&mut self) -> Token {
        let start = self.position;

        let quote = match self.next_char() {
            Some(c) => c,
            None => return MK_ERROR_TOKEN!(ErrorImpl::UnterminatedString, String::new(), start),
        };
        if !is_quote_char(quote) {
            return MK_ERROR_TOKEN!(
                ErrorImpl::MissingStringDelimiter { found: quote },
                quote.to_string(),
                start
            );
        }

        let mut lexeme = String::new();
        loop {
            match self.next_char() {
                Some(c) if c == quote => {
                    return MK_TOKEN!(TokenKind::String, lexeme, start);
                }
                Some(c) => {
                    if lexeme.len() >= MAX_LEXEME_LEN {
                        return MK_ERROR_TOKEN!(
                            ErrorImpl::StringTooLong {
                                limit: MAX_LEXEME_LEN
                            },
                            String::new(),
                            start
                        );
                    }
                    lexeme.push(c);
                }
                None => {
                    return MK_ERROR_TOKEN!(ErrorImpl::UnterminatedString, String::new(), start);
                }
            }
        }
    }

    /// Reads a one- or two-character operator. A lone operator character
    /// is always a valid token.
    fn handle_operator(&mut self) -> Token {
        let start = self.position;

        let first = match self.next_char() {
            Some(c) => c,
            None => return MK_TOKEN!(TokenKind::EndOfFile, String::new(), Position::null()),
        };

        if let Some(second) = self.next_char() {
            if is_two_char_operator(first, second) {
                return MK_TOKEN!(TokenKind::Operator, format!("{}{}", first, second), start);
            }
            self.retract(second);
        }

        MK_TOKEN!(TokenKind::Operator, first.to_string(), start)
    }

    /// Reads a single delimiter character as its own token.
    fn handle_delimiter(&mut self) -> Token {
        let start = self.position;

        match self.next_char() {
            Some(c) => MK_TOKEN!(TokenKind::Delimiter, c.to_string(), start),
            None => MK_TOKEN!(TokenKind::EndOfFile, String::new(), Position::null()),
        }
    }

    /// Consumes the rest of an oversized run so one overlong lexeme
    /// produces a single error token.
    fn drain_run(&mut self, matches: fn(char) -> bool) {
        while let Some(c) = self.next_char() {
            if !matches(c) {
                self.retract(c);
                break;
            }
        }
    }
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn is_quote_char(c: char) -> bool {
    c == '"' || c == '\''
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '|' | '&' | '!' | '%' | '>' | '<'
    )
}

fn is_delimiter_char(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',')
}

fn is_two_char_operator(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('=', '=') | ('!', '=') | ('>', '=') | ('<', '=') | ('|', '|')
    )
}

/// Tokenizes an entire source string.
///
/// Drains a scanner over `source` until end of input. The returned
/// sequence always ends with the end-of-file token; lexical errors appear
/// in the stream as Error tokens rather than failing the call.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source.chars());
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        let at_end = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if at_end {
            break;
        }
    }

    tokens
}
