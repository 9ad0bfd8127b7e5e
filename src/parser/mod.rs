//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Parsing is recursive descent over a
//! cursor and handles:
//!
//! - Primary forms (literals, symbols, property lookups, collections)
//! - A single invocation or binary-operator suffix per expression
//! - Element literals and attribute bags
//! - `loop`/`continue`/`return`, `if` expressions and `when` guards
//!
//! There is no error recovery: the first mismatch aborts the parse.

pub mod expr;
pub mod lookups;
pub mod markup;
pub mod parser;
pub mod stmt;
