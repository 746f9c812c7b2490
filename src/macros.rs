//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR_TOKEN!` - Reports a lexical error and creates the matching Error token
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's matched text
/// * `$position` - The position of the start of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Reports a lexical error on the diagnostic channel and creates the
/// corresponding Error token.
///
/// The diagnostic line on standard error is a side effect; the returned
/// token is what the caller hands to the consumer, which must check the
/// token kind rather than scrape diagnostics.
///
/// # Arguments
///
/// * `$error_impl` - The ErrorImpl variant describing the failure
/// * `$lexeme` - The offending text, if any survives
/// * `$position` - The position of the start of the offending lexeme
#[macro_export]
macro_rules! MK_ERROR_TOKEN {
    ($error_impl:expr, $lexeme:expr, $position:expr) => {{
        lex_error(&Error::new($error_impl, $position));
        Token {
            kind: TokenKind::Error,
            lexeme: $lexeme,
            position: $position,
        }
    }};
}
