use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("when", TokenKind::When);
        map.insert("loop", TokenKind::Loop);
        map.insert("return", TokenKind::Return);
        map.insert("continue", TokenKind::Continue);
        map.insert("starting-with", TokenKind::StartingWith);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    Slash,       // /
    OpenParen,   // (
    CloseParen,  // )
    OpenAttrBag, // #[
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Pipe, // |

    Less,            // <
    Greater,         // >
    SelfClose,       // />
    OpenClosingTag,  // </

    DotDot, // ..
    Bind,   // :=
    Equals, // =
    Plus,
    Dash,
    Colon,
    Comma,
    Dot,

    // Reserved
    When,
    Loop,
    Return,
    Continue,
    StartingWith,
    If,
    Then,
    Else,
    End,
    True,
    False,
}

impl TokenKind {
    /// Source spelling of fixed tokens, or a description for the literal kinds.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Slash => "/",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenAttrBag => "#[",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Pipe => "|",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::SelfClose => "/>",
            TokenKind::OpenClosingTag => "</",
            TokenKind::DotDot => "..",
            TokenKind::Bind => ":=",
            TokenKind::Equals => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::When => "when",
            TokenKind::Loop => "loop",
            TokenKind::Return => "return",
            TokenKind::Continue => "continue",
            TokenKind::StartingWith => "starting-with",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::End => "end",
            TokenKind::True => "true",
            TokenKind::False => "false",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lexeme text. For strings this is the content between the quotes,
    /// escape sequences left as written.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_payload() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn has_payload(&self) -> bool {
        self.is_one_of_many(&[TokenKind::String, TokenKind::Identifier, TokenKind::Number])
    }
}
