use crate::{
    ast::{
        ast::{Expr, ExprKind},
        expressions::BinaryOp,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_loop_expr};

/// Parses one expression: a `loop`, or a primary form followed by at most
/// one invocation or binary-operator suffix.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter()?;

    let expr = if parser.current_token_kind() == TokenKind::Loop {
        parse_loop_expr(parser)?
    } else {
        let token_kind = parser.current_token_kind();
        let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
            return Err(parser.expected_expression());
        };

        let left = nud(parser)?;

        // A second suffix is left for the caller; `f(x) + 1` needs parentheses.
        let led = parser.get_led_lookup().get(&parser.current_token_kind()).copied();
        match led {
            Some(led) => led(parser, left)?,
            None => left,
        }
    };

    parser.leave();
    Ok(expr)
}

/// Parses a comma-separated list of one or more expressions.
pub fn parse_expr_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut items = vec![parse_expr(parser)?];
    while parser.try_consume(TokenKind::Comma) {
        items.push(parse_expr(parser)?);
    }
    Ok(items)
}

/// `id/...` is a property lookup, `id := ...` an assignment, anything else
/// a bare symbol.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.scan(&[TokenKind::Identifier, TokenKind::Slash]) {
        return parse_property_lookup_expr(parser);
    }
    if parser.scan(&[TokenKind::Identifier, TokenKind::Bind]) {
        return parse_assign_expr(parser);
    }

    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Expr::new(ExprKind::Symbol(token.value), token.span))
}

pub fn parse_property_lookup_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();
    let mut chain = vec![parser.expect(TokenKind::Identifier)?.value];

    while parser.try_consume(TokenKind::Slash) {
        chain.push(parser.expect(TokenKind::Identifier)?.value);
    }

    Ok(Expr::new(ExprKind::PropertyLookup { chain }, parser.span_from(start)))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number)?;

    match token.value.parse::<u64>() {
        Ok(value) => Ok(Expr::new(ExprKind::Number(value), token.span)),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::String)?;
    Ok(Expr::new(ExprKind::String(token.value), token.span))
}

pub fn parse_bool_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();
    Ok(Expr::new(
        ExprKind::Bool(token.kind == TokenKind::True),
        token.span,
    ))
}

pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;
    let inner = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::new(
        ExprKind::Paren(Box::new(inner)),
        parser.span_from(start),
    ))
}

pub fn parse_assign_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Bind)?;
    let value = parse_expr(parser)?;

    Ok(Expr::new(
        ExprKind::Assign {
            name: name_token.value,
            value: Box::new(value),
        },
        parser.span_from(name_token.span.start),
    ))
}

pub fn parse_record_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // { count: 1, "display name": "x" }
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    let mut entries = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        let key = match parser.current_token_kind() {
            TokenKind::Identifier => {
                let token = parser.advance().clone();
                Expr::new(ExprKind::Symbol(token.value), token.span)
            }
            TokenKind::String => parse_string_expr(parser)?,
            _ => {
                return Err(parser.unexpected("expected identifier or string as record key"));
            }
        };

        parser.expect(TokenKind::Colon)?;
        let value = parse_expr(parser)?;
        entries.push((key, value));

        if !parser.try_consume(TokenKind::Comma) {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::new(ExprKind::Record(entries), parser.span_from(start)))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span.start;

    let elements = if parser.current_token_kind() == TokenKind::CloseBracket {
        vec![]
    } else {
        parse_expr_list(parser)?
    };

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::new(ExprKind::Array(elements), parser.span_from(start)))
}

pub fn parse_invoke_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let args = if parser.current_token_kind() == TokenKind::CloseParen {
        vec![]
    } else {
        parse_expr_list(parser)?
    };

    parser.expect(TokenKind::CloseParen)?;

    let span = parser.span_from(callee.span.start.clone());
    Ok(Expr::new(
        ExprKind::Invoke {
            callee: Box::new(callee),
            args,
        },
        span,
    ))
}

pub fn parse_binary_expr(parser: &mut Parser, lhs: Expr) -> Result<Expr, Error> {
    let op = match parser.current_token_kind() {
        TokenKind::Equals => BinaryOp::Eq,
        TokenKind::Plus => BinaryOp::Plus,
        TokenKind::Dash => BinaryOp::Minus,
        TokenKind::DotDot => BinaryOp::Range,
        _ => return Err(parser.unexpected("expected binary operator")),
    };
    parser.advance();

    let rhs = parse_expr(parser)?;

    let span = parser.span_from(lhs.span.start.clone());
    Ok(Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        span,
    ))
}
