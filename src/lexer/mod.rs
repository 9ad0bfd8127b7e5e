//! Tokenizer for fax source text.
//!
//! Converts source text into a stream of tokens terminated by `EOF`:
//!
//! - A priority-ordered table of regex patterns, first match wins
//! - Keywords found by looking up whole identifier runs
//! - Byte-offset spans on every token

pub mod lexer;
pub mod tokens;
