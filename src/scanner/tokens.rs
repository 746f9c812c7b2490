use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    /// Reserved words that take precedence over identifiers.
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("break");
        set.insert("int");
        set.insert("float");
        set.insert("char");
        set.insert("double");
        set.insert("bool");
        set.insert("sizeof");
        set.insert("do");
        set.insert("return");
        set.insert("struct");
        set.insert("switch");
        set.insert("enum");
        set.insert("typedef");
        set.insert("void");
        set.insert("const");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    String,
    Operator,
    Delimiter,
    EndOfFile,
    Error,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned unit of lexical meaning.
///
/// Created fully formed by the scanner and never mutated; ownership
/// passes to the caller. `position` is the 1-based location of the first
/// character of the lexeme, except for the end-of-file token which
/// carries the null sentinel.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: Vec<TokenKind>) -> bool {
        for kind in kinds {
            if kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Identifier,
            TokenKind::Keyword,
            TokenKind::Number,
            TokenKind::String,
            TokenKind::Operator,
            TokenKind::Delimiter,
        ]) {
            println!("{} ({})", self.kind, self.lexeme);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
