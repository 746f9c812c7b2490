use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error together with the position it was detected at.
///
/// Every error is local and recoverable: the scanner surfaces it as an
/// Error token and remains usable for the rest of the input.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::NumberTooLong { .. } => "NumberTooLong",
            ErrorImpl::StringTooLong { .. } => "StringTooLong",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MissingStringDelimiter { .. } => "MissingStringDelimiter",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IdentifierTooLong { limit } => ErrorTip::Suggestion(format!(
                "Identifiers are limited to {} characters, shorten the name",
                limit
            )),
            ErrorImpl::NumberTooLong { limit } => ErrorTip::Suggestion(format!(
                "Numbers are limited to {} characters",
                limit
            )),
            ErrorImpl::StringTooLong { limit } => ErrorTip::Suggestion(format!(
                "String literals are limited to {} characters, split the string",
                limit
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Did you forget a closing quote?"))
            }
            ErrorImpl::MissingStringDelimiter { found } => ErrorTip::Suggestion(format!(
                "Expected `\"` or `'` to open a string literal, found `{}`",
                found
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("identifier too long: exceeds {limit:?} characters")]
    IdentifierTooLong { limit: usize },
    #[error("number too long: exceeds {limit:?} characters")]
    NumberTooLong { limit: usize },
    #[error("string too long: exceeds {limit:?} characters")]
    StringTooLong { limit: usize },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("expected a string delimiter, found {found:?}")]
    MissingStringDelimiter { found: char },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
}

/// Writes the diagnostic line for a lexical error to standard error.
///
/// This is a side effect alongside the Error token the scanner returns,
/// not a substitute for it.
pub fn lex_error(error: &Error) {
    eprintln!(
        "Lexical error at line {}, column {}: {}",
        error.position.line, error.position.column, error
    );
}
