//! Neutral parse-tree model consumed from any parser implementation
//!
//! Global invariants enforced:
//! - Closed unions only; no presence-probing on node shapes
//! - All spans are byte offsets into the normalized source text

use anyhow::{anyhow, Result};

/// Half-open byte range into the normalized source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Slice the source text covered by this span
    ///
    /// Errors when the span falls outside the source or lands off a
    /// character boundary (only possible with a misbehaving custom parser).
    pub fn slice<'a>(&self, src: &'a str) -> Result<&'a str> {
        src.get(self.start..self.end).ok_or_else(|| {
            anyhow!(
                "span {}..{} is not a valid range in source of length {}",
                self.start,
                self.end,
                src.len()
            )
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An identifier together with its location in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// Stable abstraction for a function-like node, whatever its syntax
///
/// Declarations, function expressions, and arrows all lower to this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub ident: Option<Ident>,
    pub is_async: bool,
    pub is_generator: bool,
    pub params: Vec<ParamNode>,
    pub body: Span,
}

/// One parameter position in a function signature
///
/// Each variant yields exactly one parameter name. Destructuring patterns
/// are flattened by the parser into `Identifier` with a usable name before
/// they reach this model.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamNode {
    Identifier { name: String },
    AssignmentPattern { left_name: String, right: Span },
    RestElement { argument_name: String },
}

/// Expression shapes that matter to classification
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Function(FunctionNode),
    Arrow(FunctionNode),
    /// Any other expression; never a candidate
    Other,
}

/// Top-level statement shapes that matter to classification
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    FunctionDeclaration(FunctionNode),
    ExpressionStatement(Expression),
    /// Any other statement; ignored
    Other,
}

/// Parsed program: ordered top-level statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseTree {
    pub statements: Vec<Statement>,
}
