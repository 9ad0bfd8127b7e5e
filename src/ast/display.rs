//! Unparser: writes AST nodes back out as canonical source text.
//!
//! The output re-parses to a structurally equal tree. Layout is fixed:
//! single spaces around binary operators and `:=`, `", "` between list
//! items, everything on one line.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Attributes, Expr, ExprKind},
    expressions::LoopParam,
};

fn write_list(f: &mut Formatter<'_>, items: &[Expr]) -> Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_attrs(f: &mut Formatter<'_>, attrs: &Attributes) -> Result {
    for (i, (name, value)) in attrs.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        match &value.kind {
            ExprKind::Bool(true) => write!(f, "{}", name)?,
            ExprKind::Symbol(symbol) if symbol == name => write!(f, "{{{}}}", name)?,
            ExprKind::String(_) | ExprKind::Number(_) => write!(f, "{}={}", name, value)?,
            _ => write!(f, "{}={{{}}}", name, value)?,
        }
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.kind)
    }
}

impl Display for LoopParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            LoopParam::Named(name) => write!(f, "{}", name),
            LoopParam::Default { name, value } => write!(f, "{} := {}", name, value),
        }
    }
}

impl Display for ExprKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ExprKind::PropertyLookup { chain } => write!(f, "{}", chain.join("/")),
            ExprKind::Invoke { callee, args } => {
                write!(f, "{}(", callee)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            ExprKind::Number(value) => write!(f, "{}", value),
            ExprKind::String(value) => write!(f, "\"{}\"", value),
            ExprKind::Bool(value) => write!(f, "{}", value),
            ExprKind::Symbol(name) => write!(f, "{}", name),
            ExprKind::Paren(inner) => write!(f, "({})", inner),
            ExprKind::AttrBag(attrs) => {
                write!(f, "#[")?;
                write_attrs(f, attrs)?;
                write!(f, "]")
            }
            ExprKind::Record(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            ExprKind::Array(elements) => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            }
            ExprKind::Assign { name, value } => write!(f, "{} := {}", name, value),
            ExprKind::Return(value) => write!(f, "return({})", value),
            ExprKind::Continue(args) => {
                write!(f, "continue(")?;
                write_list(f, args)?;
                write!(f, ")")
            }
            ExprKind::ContinueWithPreviousArgs => write!(f, "continue(..)"),
            ExprKind::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
            ExprKind::Loop {
                params,
                body,
                starting_with,
            } => {
                write!(f, "loop |")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, "| {{ ")?;
                write_list(f, body)?;
                write!(f, " }}")?;
                if let Some(starting_with) = starting_with {
                    write!(f, " starting-with {}", starting_with)?;
                }
                Ok(())
            }
            ExprKind::Element {
                name,
                attrs,
                children,
            } => {
                write!(f, "<{}", name)?;
                if !attrs.is_empty() {
                    write!(f, " ")?;
                    write_attrs(f, attrs)?;
                }
                if children.is_empty() {
                    return write!(f, " />");
                }
                write!(f, ">")?;
                for child in children {
                    match child.kind {
                        ExprKind::Element { .. } => write!(f, "{}", child)?,
                        _ => write!(f, "{{{}}}", child)?,
                    }
                }
                write!(f, "</{}>", name)
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "if {} then ", condition)?;
                write_list(f, then_branch)?;
                if !else_branch.is_empty() {
                    write!(f, " else ")?;
                    write_list(f, else_branch)?;
                }
                write!(f, " end")
            }
            ExprKind::Guarded { statement, guards } => {
                write!(f, "{} when ", statement)?;
                write_list(f, guards)?;
                write!(f, " end")
            }
        }
    }
}
