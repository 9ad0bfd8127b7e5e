//! Token construction macros shared by the lexer and parser.

/// Builds a `Token` from its kind, lexeme and span. `Token` must be in scope
/// at the call site.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Handler for a fixed-spelling punctuation pattern: pushes one token whose
/// lexeme is `$value` and moves the cursor past it.
///
/// ```ignore
/// pattern(r"^:=", MK_DEFAULT_HANDLER!(TokenKind::Bind, ":="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}
