//! Element literals and attribute bags.
//!
//! Both share one attribute grammar and differ only in what closes the
//! attribute list: `/>` or `>` for elements, `]` for bags.

use tracing::warn;

use crate::{
    ast::ast::{Attributes, Expr, ExprKind},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_number_expr, parse_string_expr},
    parser::Parser,
};

/// Parses attributes until one of `terminators` is the current token.
/// The terminator itself is left for the caller.
pub fn parse_attributes(
    parser: &mut Parser,
    terminators: &[TokenKind],
) -> Result<Attributes, Error> {
    let mut attrs = Attributes::new();

    while !terminators.contains(&parser.current_token_kind()) {
        // {name}
        if parser.try_consume(TokenKind::OpenCurly) {
            let token = parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::CloseCurly)?;
            attrs.insert(
                token.value.clone(),
                Expr::new(ExprKind::Symbol(token.value), token.span),
            );
            continue;
        }

        let name = parser.expect(TokenKind::Identifier)?;

        let value = if parser.try_consume(TokenKind::Equals) {
            match parser.current_token_kind() {
                TokenKind::OpenCurly => {
                    parser.advance();
                    let value = parse_expr(parser)?;
                    parser.expect(TokenKind::CloseCurly)?;
                    value
                }
                TokenKind::String => parse_string_expr(parser)?,
                TokenKind::Number => parse_number_expr(parser)?,
                _ => {
                    return Err(
                        parser.unexpected("expected `{`, a string or a number as attribute value")
                    );
                }
            }
        } else {
            Expr::new(ExprKind::Bool(true), name.span)
        };

        attrs.insert(name.value, value);
    }

    Ok(attrs)
}

/// `<name attrs />` or `<name attrs>child</name>` where the optional child
/// is a braced expression or one nested element.
pub fn parse_element_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.scan(&[TokenKind::Less, TokenKind::Identifier]) {
        return Err(parser.expected_expression());
    }

    parser.enter()?;
    let start = parser.advance().span.start.clone();
    let name = parser.expect(TokenKind::Identifier)?.value;
    let attrs = parse_attributes(parser, &[TokenKind::SelfClose, TokenKind::Greater])?;

    if parser.try_consume(TokenKind::SelfClose) {
        parser.leave();
        return Ok(Expr::new(
            ExprKind::Element {
                name,
                attrs,
                children: vec![],
            },
            parser.span_from(start),
        ));
    }

    parser.expect(TokenKind::Greater)?;

    let mut children = vec![];
    if parser.try_consume(TokenKind::OpenCurly) {
        children.push(parse_expr(parser)?);
        parser.expect(TokenKind::CloseCurly)?;
    } else if parser.scan(&[TokenKind::Less, TokenKind::Identifier]) {
        children.push(parse_element_expr(parser)?);
    }

    parser.expect(TokenKind::OpenClosingTag)?;
    let closing = parser.expect(TokenKind::Identifier)?;
    if closing.value != name {
        warn!(
            open = %name,
            close = %closing.value,
            position = closing.span.start.0,
            "closing tag does not match element name"
        );
    }
    parser.expect(TokenKind::Greater)?;

    parser.leave();
    Ok(Expr::new(
        ExprKind::Element {
            name,
            attrs,
            children,
        },
        parser.span_from(start),
    ))
}

/// `#[attrs]`
pub fn parse_attr_bag_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenAttrBag)?.span.start;
    let attrs = parse_attributes(parser, &[TokenKind::CloseBracket])?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::new(ExprKind::AttrBag(attrs), parser.span_from(start)))
}
