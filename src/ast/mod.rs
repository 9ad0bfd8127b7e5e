/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression node and its kinds
/// - expressions: Operator and loop-parameter helper types
/// - display: Unparsing nodes back to source text
pub mod ast;
pub mod display;
pub mod expressions;

#[cfg(test)]
mod tests;
