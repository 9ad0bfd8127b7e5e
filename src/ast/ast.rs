use indexmap::IndexMap;

use crate::Span;

use super::expressions::{BinaryOp, LoopParam};

/// Attribute map of an element or attribute bag.
///
/// Keys keep the position of their first occurrence; a repeated key
/// overwrites the earlier value.
pub type Attributes = IndexMap<String, Expr>;

/// Expression Types
///
/// Tag-only view of [`ExprKind`], handy for dispatch and diagnostics.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    PropertyLookup,
    Invoke,
    Number,
    String,
    Bool,
    Symbol,
    Paren,
    AttrBag,
    Record,
    Array,
    Assign,
    Return,
    Continue,
    ContinueWithPreviousArgs,
    Binary,
    Loop,
    Element,
    If,
    Guarded,
}

/// A node of the syntax tree together with the source range it came from.
///
/// Equality compares structure only; spans are ignored, so a tree parsed
/// from reformatted source compares equal to the original.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_expr_type(&self) -> ExprType {
        match &self.kind {
            ExprKind::PropertyLookup { .. } => ExprType::PropertyLookup,
            ExprKind::Invoke { .. } => ExprType::Invoke,
            ExprKind::Number(_) => ExprType::Number,
            ExprKind::String(_) => ExprType::String,
            ExprKind::Bool(_) => ExprType::Bool,
            ExprKind::Symbol(_) => ExprType::Symbol,
            ExprKind::Paren(_) => ExprType::Paren,
            ExprKind::AttrBag(_) => ExprType::AttrBag,
            ExprKind::Record(_) => ExprType::Record,
            ExprKind::Array(_) => ExprType::Array,
            ExprKind::Assign { .. } => ExprType::Assign,
            ExprKind::Return(_) => ExprType::Return,
            ExprKind::Continue(_) => ExprType::Continue,
            ExprKind::ContinueWithPreviousArgs => ExprType::ContinueWithPreviousArgs,
            ExprKind::Binary { .. } => ExprType::Binary,
            ExprKind::Loop { .. } => ExprType::Loop,
            ExprKind::Element { .. } => ExprType::Element,
            ExprKind::If { .. } => ExprType::If,
            ExprKind::Guarded { .. } => ExprType::Guarded,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `state/count`: a `/`-separated path, never empty.
    PropertyLookup { chain: Vec<String> },
    /// `callee(args…)`
    Invoke { callee: Box<Expr>, args: Vec<Expr> },
    Number(u64),
    /// String literal content, escape sequences left unresolved.
    String(String),
    Bool(bool),
    /// Bare identifier reference.
    Symbol(String),
    /// Parenthesised expression, kept so the source shape survives.
    Paren(Box<Expr>),
    /// `#[name="value" flag {shorthand}]`
    AttrBag(Attributes),
    /// `{key: value, "other key": value}`; keys are `Symbol` or `String` nodes.
    Record(Vec<(Expr, Expr)>),
    Array(Vec<Expr>),
    /// `name := value`
    Assign { name: String, value: Box<Expr> },
    Return(Box<Expr>),
    Continue(Vec<Expr>),
    /// `continue(..)`: re-enter the loop with the previous arguments.
    ContinueWithPreviousArgs,
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Loop {
        params: Vec<LoopParam>,
        body: Vec<Expr>,
        starting_with: Option<Box<Expr>>,
    },
    /// Markup-like element literal with at most one child.
    Element {
        name: String,
        attrs: Attributes,
        children: Vec<Expr>,
    },
    /// `if condition then a, b else c end`
    If {
        condition: Box<Expr>,
        then_branch: Vec<Expr>,
        else_branch: Vec<Expr>,
    },
    /// `statement when guard, guard end`
    Guarded { statement: Box<Expr>, guards: Vec<Expr> },
}
