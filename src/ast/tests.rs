//! Unit tests for AST equality and unparsing.

use crate::{compile_expression, compile_program, Position, Span};

use super::{
    ast::{Expr, ExprKind, ExprType},
    expressions::{BinaryOp, LoopParam},
};

fn span(start: u32, end: u32) -> Span {
    Span {
        start: Position(start, "a.fax".into()),
        end: Position(end, "a.fax".into()),
    }
}

fn unparse(source: &str) -> String {
    compile_expression(source, "test.fax").unwrap()[0].to_string()
}

#[test]
fn test_equality_ignores_spans() {
    let a = Expr::new(ExprKind::Number(1), span(0, 1));
    let b = Expr::new(ExprKind::Number(1), span(10, 11));
    let c = Expr::new(ExprKind::Number(2), span(0, 1));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_expr_type() {
    let expr = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Range,
            lhs: Box::new(Expr::new(ExprKind::Number(1), span(0, 1))),
            rhs: Box::new(Expr::new(ExprKind::Number(3), span(3, 4))),
        },
        span(0, 4),
    );

    assert_eq!(expr.get_expr_type(), ExprType::Binary);
    assert_eq!(expr.to_string(), "1 .. 3");
}

#[test]
fn test_loop_param_name() {
    let default = LoopParam::Default {
        name: "n".to_string(),
        value: Expr::new(ExprKind::Number(0), span(0, 1)),
    };

    assert_eq!(default.name(), "n");
    assert_eq!(LoopParam::Named("m".to_string()).name(), "m");
    assert_eq!(default.to_string(), "n := 0");
}

#[test]
fn test_unparse_canonical_layout() {
    assert_eq!(unparse("f( g(1),2 )"), "f(g(1), 2)");
    assert_eq!(unparse("state/count"), "state/count");
    assert_eq!(unparse("x:=1+2"), "x := 1 + 2");
    assert_eq!(unparse("{a:1,\"b c\":[1,2]}"), "{a: 1, \"b c\": [1, 2]}");
    assert_eq!(unparse("continue( .. )"), "continue(..)");
    assert_eq!(
        unparse("loop |n, acc := 0| { return(acc) } starting-with [5]"),
        "loop |n, acc := 0| { return(acc) } starting-with [5]"
    );
}

#[test]
fn test_unparse_elements() {
    assert_eq!(
        unparse(r#"<div class="x" hidden {id} size=3 on-click={f(1)}/>"#),
        r#"<div class="x" hidden {id} size=3 on-click={f(1)} />"#
    );
    assert_eq!(unparse("<ul><li>{1}</li></ul>"), "<ul><li>{1}</li></ul>");
    assert_eq!(unparse("<p></p>"), "<p />");
    assert_eq!(unparse("#[ a=\"1\" b ]"), "#[a=\"1\" b]");
}

#[test]
fn test_unparse_reparses_to_equal_tree() {
    let sources = [
        "write/state/mines(loop |num-mines-left := total-mines, mines| { if num-mines-left = 0 then return(mines) else x := rand-int(width), continue(num-mines-left - 1, mines) end }) when total-mines := 9, mines := repeat(10, false) end",
        "repeat(len(mines), <div class=\"cell\" />)",
        "(a + (b - c)) = d",
        "#[data-x=\"test\" {class}]",
        "{}",
        "[]",
    ];

    for source in sources {
        let first = compile_program(source, "test.fax").unwrap();
        let printed = first
            .iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let second = compile_program(&printed, "test.fax").unwrap();

        assert_eq!(first, second, "round trip of {}", source);
    }
}
