use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, markup::*, parser::Parser, stmt::*};

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Suffixes. At most one is applied per expression.
    parser.led(TokenKind::OpenParen, parse_invoke_expr);
    parser.led(TokenKind::Plus, parse_binary_expr);
    parser.led(TokenKind::Dash, parse_binary_expr);
    parser.led(TokenKind::Equals, parse_binary_expr);
    parser.led(TokenKind::DotDot, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_symbol_expr);
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::String, parse_string_expr);
    parser.nud(TokenKind::True, parse_bool_expr);
    parser.nud(TokenKind::False, parse_bool_expr);

    // Grouping and collections
    parser.nud(TokenKind::OpenParen, parse_paren_expr);
    parser.nud(TokenKind::OpenCurly, parse_record_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_expr);

    // Markup
    parser.nud(TokenKind::Less, parse_element_expr);
    parser.nud(TokenKind::OpenAttrBag, parse_attr_bag_expr);

    // Control flow
    parser.nud(TokenKind::Return, parse_return_expr);
    parser.nud(TokenKind::Continue, parse_continue_expr);
    parser.nud(TokenKind::If, parse_if_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
