use std::fmt::Display;

use super::ast::Expr;

/// Binary Operator
/// The four infix operators that may follow a primary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `..`
    Range,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            BinaryOp::Eq => "=",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Range => "..",
        };
        write!(f, "{}", op)
    }
}

/// Loop Parameter
/// A name bound on each iteration of a `loop`, optionally with a default.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopParam {
    /// `n`: value supplied by `starting-with` or `continue`.
    Named(String),
    /// `n := expr`
    Default { name: String, value: Expr },
}

impl LoopParam {
    pub fn name(&self) -> &str {
        match self {
            LoopParam::Named(name) => name,
            LoopParam::Default { name, .. } => name,
        }
    }
}
