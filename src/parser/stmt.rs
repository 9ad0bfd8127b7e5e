use crate::{
    ast::{
        ast::{Expr, ExprKind},
        expressions::LoopParam,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_array_expr, parse_expr, parse_expr_list},
    parser::Parser,
};

/// Parses a statement: an expression with an optional trailing guard,
/// `stmt when a := x, b end`. The last statement of a program may leave
/// the guard open until end of input.
pub fn parse_stmt(parser: &mut Parser) -> Result<Expr, Error> {
    let statement = parse_expr(parser)?;

    if !parser.try_consume(TokenKind::When) {
        return Ok(statement);
    }

    let guards = parse_expr_list(parser)?;

    if parser.current_token_kind() != TokenKind::EOF {
        parser.expect(TokenKind::End)?;
    }

    let span = parser.span_from(statement.span.start.clone());
    Ok(Expr::new(
        ExprKind::Guarded {
            statement: Box::new(statement),
            guards,
        },
        span,
    ))
}

/// `if cond then a, b else c end`; the `else` half is optional.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;
    let then_branch = parse_expr_list(parser)?;

    let else_branch = if parser.try_consume(TokenKind::Else) {
        parse_expr_list(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::End)?;

    Ok(Expr::new(
        ExprKind::If {
            condition: Box::new(condition),
            then_branch,
            else_branch,
        },
        parser.span_from(start),
    ))
}

/// `loop |a, b := 1| { body } starting-with [x, y]`
pub fn parse_loop_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Loop)?.span.start;
    parser.expect(TokenKind::Pipe)?;

    let mut params = vec![];
    loop {
        let name = parser.expect(TokenKind::Identifier)?.value;

        if parser.try_consume(TokenKind::Bind) {
            let value = parse_expr(parser)?;
            params.push(LoopParam::Default { name, value });
        } else {
            params.push(LoopParam::Named(name));
        }

        if !parser.try_consume(TokenKind::Comma) {
            break;
        }
    }

    parser.expect(TokenKind::Pipe)?;
    parser.expect(TokenKind::OpenCurly)?;
    let body = vec![parse_expr(parser)?];
    parser.expect(TokenKind::CloseCurly)?;

    let starting_with = if parser.try_consume(TokenKind::StartingWith) {
        Some(Box::new(parse_array_expr(parser)?))
    } else {
        None
    };

    Ok(Expr::new(
        ExprKind::Loop {
            params,
            body,
            starting_with,
        },
        parser.span_from(start),
    ))
}

pub fn parse_return_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;

    parser.expect(TokenKind::OpenParen)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::new(
        ExprKind::Return(Box::new(value)),
        parser.span_from(start),
    ))
}

/// `continue(a, b)`, `continue()` or `continue(..)`, the last re-entering
/// the loop with the arguments of the previous iteration.
pub fn parse_continue_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Continue)?.span.start;
    parser.expect(TokenKind::OpenParen)?;

    if parser.scan(&[TokenKind::DotDot, TokenKind::CloseParen]) {
        parser.advance();
        parser.advance();
        return Ok(Expr::new(
            ExprKind::ContinueWithPreviousArgs,
            parser.span_from(start),
        ));
    }

    let args = if parser.current_token_kind() == TokenKind::CloseParen {
        vec![]
    } else {
        parse_expr_list(parser)?
    };

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::new(ExprKind::Continue(args), parser.span_from(start)))
}
