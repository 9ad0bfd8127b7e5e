//! Integration tests for the full pipeline.
//!
//! These tests drive source text through tokenization and parsing via the
//! public API, check the rendered diagnostics, and use `proptest` to check
//! lexer invariants over generated input.

use std::thread;

use proptest::prelude::*;

use fax::{
    ast::ast::ExprKind,
    compile_expression, compile_program,
    errors::errors::{ErrorImpl, ErrorStage},
    lexer::{lexer::tokenize, tokens::TokenKind},
    render_error,
};

const MINESWEEPER: &str = r#"
write/state/mines(loop |num-mines-left := total-mines, mines| {
  if num-mines-left = 0 then
    return(mines)
  else
    x := rand-int(width),
    y := rand-int(height),
    if get(mines, y, x) then
      continue(num-mines-left, mines)
    else
      continue(
        num-mines-left - 1,
        replace(mines, y, replace(get(mines, y), x, true))
      )
    end
  end
}) when
  total-mines := 9,
  width := 10,
  height := 10,
  mines := repeat(height, repeat(width, false))
end

write/html/body(repeat(len(mines), <div class="cell" />))
  when mines := read/state/mines
"#;

#[test]
fn test_compile_program() {
    let body = compile_program(MINESWEEPER, "main.fax").unwrap();
    assert_eq!(body.len(), 2);

    for stmt in &body {
        assert!(matches!(stmt.kind, ExprKind::Guarded { .. }));
        assert_eq!(&*stmt.span.start.1, "main.fax");
    }
}

#[test]
fn test_compile_expression_rejects_second_statement() {
    let error = compile_expression("f(1) g(2)", "main.fax").unwrap_err();
    assert_eq!(error.stage(), ErrorStage::Parse);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken { expected, .. } if expected == "EOF"
    ));

    assert_eq!(compile_program("f(1) g(2)", "main.fax").unwrap().len(), 2);
}

#[test]
fn test_lex_error_stage() {
    let error = compile_program("a := @", "main.fax").unwrap_err();
    assert_eq!(error.stage(), ErrorStage::Lex);
    assert_eq!(error.get_position().0, 5);
    assert_eq!(error.to_string(), "unrecognised token: \"@\" at main.fax:5");
}

#[test]
fn test_render_unterminated_invoke() {
    let source = "f(1,";
    let error = compile_expression(source, "main.fax").unwrap_err();

    assert_eq!(
        render_error(&error, source),
        "Error: ExpectedExpression (expected an expression, found `EOF` followed by `EOF`)\n\
         -> main.fax\n  |\n1 | f(1,\n  | ----^\n"
    );
}

#[test]
fn test_render_error_on_later_line() {
    let source = "a := 1\n  <div a=b />\n";
    let error = compile_program(source, "main.fax").unwrap_err();
    let rendered = render_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0].split(' ').next(), Some("Error:"));
    assert_eq!(lines[3], "2 | <div a=b />");
    assert_eq!(lines[4], "  | -------^");
}

#[test]
fn test_unparse_program() {
    let body = compile_program(MINESWEEPER, "main.fax").unwrap();
    let printed: Vec<String> = body.iter().map(|stmt| stmt.to_string()).collect();

    assert_eq!(
        printed[1],
        "write/html/body(repeat(len(mines), <div class=\"cell\" />)) when mines := read/state/mines end"
    );

    let reparsed = compile_program(&printed.join("\n"), "main.fax").unwrap();
    assert_eq!(body, reparsed);
}

#[test]
fn test_compile_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let file = format!("worker-{}.fax", i);
                compile_program(MINESWEEPER, &file)
            })
        })
        .collect();

    let expected = compile_program(MINESWEEPER, "main.fax").unwrap();
    for handle in handles {
        let body = handle.join().unwrap().unwrap();
        assert_eq!(body, expected);
    }
}

/// Fragments that each lex cleanly.
const FRAGMENTS: &[&str] = &[
    "write/state/mines",
    "num-mines-left",
    "x",
    "42",
    "\"cell\"",
    "\"a \\\" b\"",
    "when",
    "loop",
    "starting-with",
    "end",
    "true",
    "/>",
    "</",
    "<",
    ">",
    "#[",
    "[",
    "]",
    "{",
    "}",
    "(",
    ")",
    "|",
    ":=",
    ":",
    "..",
    ".",
    "=",
    "+",
    "-",
    ",",
];

const SEPARATORS: &[&str] = &[" ", "\n", "  ", "\t"];

fn fragment_source() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(FRAGMENTS);
    let separator = prop::sample::select(SEPARATORS);
    prop::collection::vec((fragment, separator), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, separator)| format!("{}{}", fragment, separator))
            .collect::<String>()
    })
}

/// Tokens cover the source exactly, with only whitespace between them.
fn assert_spans_cover(source: &str) -> Result<(), TestCaseError> {
    let Ok(tokens) = tokenize(source, Some("prop.fax")) else {
        return Ok(());
    };

    let mut cursor = 0;
    for token in &tokens {
        let range = token.span.range();
        prop_assert!(range.start >= cursor);
        prop_assert!(source[cursor..range.start].trim().is_empty());
        cursor = range.end;
    }

    prop_assert_eq!(cursor, source.len());
    prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    Ok(())
}

proptest! {
    #[test]
    fn lexer_never_panics(input in "\\PC{0,300}") {
        let _ = tokenize(&input, Some("prop.fax"));
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,300}") {
        let _ = compile_program(&input, "prop.fax");
    }

    #[test]
    fn spans_cover_arbitrary_input(input in "\\PC{0,300}") {
        assert_spans_cover(&input)?;
    }

    #[test]
    fn spans_cover_fragments(source in fragment_source()) {
        prop_assert!(tokenize(&source, Some("prop.fax")).is_ok());
        assert_spans_cover(&source)?;
    }

    #[test]
    fn compilation_is_deterministic(source in fragment_source()) {
        prop_assert_eq!(
            tokenize(&source, Some("prop.fax")),
            tokenize(&source, Some("prop.fax"))
        );
        prop_assert_eq!(
            compile_program(&source, "prop.fax"),
            compile_program(&source, "prop.fax")
        );
    }
}
