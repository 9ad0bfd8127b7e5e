//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser is a cursor over the token stream with fixed-length,
//! non-consuming lookahead. Primary forms are dispatched through a NUD
//! (null denotation) table keyed by token kind; the single optional suffix
//! that may follow a primary (invocation or binary operator) is dispatched
//! through a LED (left denotation) table.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, trace};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
    stmt::parse_stmt,
};

/// How many expressions may be open at once before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for primary
/// forms and suffixes. The cursor only moves forward and never moves past
/// the trailing `EOF` token.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Arc<str>,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (suffix) expression handlers
    led_lookup: LEDLookup,
    /// Number of expressions currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Arc<str>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map(|token| token.span.end.0).unwrap_or(0);
            let position = Position(end, Arc::clone(&file));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: position.clone(),
                    end: position
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `n` places ahead of the cursor, clamped to `EOF`.
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Advancing from `EOF` leaves the cursor on `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Checks whether the next tokens have exactly the given kinds,
    /// without consuming anything.
    pub fn scan(&self, kinds: &[TokenKind]) -> bool {
        kinds
            .iter()
            .enumerate()
            .all(|(i, kind)| self.tokens.get(self.pos + i).map(|token| token.kind) == Some(*kind))
    }

    /// Consumes the current token if it has the given kind.
    pub fn try_consume(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind.to_string(),
                        found: token.to_string(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Error for a position where a primary expression was required,
    /// reporting the next two tokens.
    pub fn expected_expression(&self) -> Error {
        Error::new(
            ErrorImpl::ExpectedExpression {
                first: self.peek(0).to_string(),
                second: self.peek(1).to_string(),
            },
            self.get_position(),
        )
    }

    /// Error carrying the current token and a free-form message.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().to_string(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Opens one level of expression nesting, failing past
    /// [`MAX_NESTING_DEPTH`]. Pair with [`Parser::leave`] on success; an
    /// error aborts the parse, so the count is not unwound then.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a suffix handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a primary-expression handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        let end = match self.pos {
            0 => Position(start.0, Arc::clone(&self.file)),
            pos => self.tokens[pos - 1].span.end.clone(),
        };

        Span { start, end }
    }
}

/// Parses a token stream holding exactly one statement.
///
/// The statement is an expression, optionally followed by a `when` guard.
/// Any token left over after it is an error.
pub fn parse(tokens: Vec<Token>, file: Arc<str>) -> Result<Vec<Expr>, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let stmt = parse_stmt(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    debug!(file = %parser.file, "parsed expression");
    Ok(vec![stmt])
}

/// Parses every statement in a token stream until `EOF`.
pub fn parse_program(tokens: Vec<Token>, file: Arc<str>) -> Result<Vec<Expr>, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;
        trace!(kind = ?stmt.get_expr_type(), span = ?stmt.get_span().range(), "statement");
        body.push(stmt);
    }

    debug!(file = %parser.file, statements = body.len(), "parsed program");
    Ok(body)
}
