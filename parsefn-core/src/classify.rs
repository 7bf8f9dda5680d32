//! Top-level candidate selection and flag resolution
//!
//! Global invariants enforced:
//! - Statements are visited in source order
//! - At most one function-bearing statement per input

use crate::ast::{Expression, FunctionNode, ParseTree, Statement};
use anyhow::{bail, Result};

/// The single function-bearing statement selected from the tree
///
/// `func` is `None` when the statement wraps a plain function expression:
/// the wrapper contributes classification flags but carries no parameter or
/// body fields of its own, so extraction is skipped for it.
pub struct Candidate<'a> {
    pub func: Option<&'a FunctionNode>,
    pub name: Option<&'a str>,
    pub is_arrow: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub is_expression: bool,
}

/// Select the function-bearing top-level statement, if any
///
/// Declarations and expression statements wrapping an arrow or function
/// expression qualify; everything else is skipped. A second qualifying
/// statement is an error rather than silently overwriting the first.
pub fn select(tree: &ParseTree) -> Result<Option<Candidate<'_>>> {
    let mut selected: Option<Candidate<'_>> = None;

    for statement in &tree.statements {
        let candidate = match statement {
            Statement::FunctionDeclaration(func) => Some(Candidate {
                func: Some(func),
                // An empty identifier span means a synthetic name; the
                // anonymous marker stands in that case
                name: func
                    .ident
                    .as_ref()
                    .filter(|ident| !ident.span.is_empty())
                    .map(|ident| ident.name.as_str()),
                is_arrow: false,
                is_async: func.is_async,
                is_generator: func.is_generator,
                is_expression: true,
            }),
            Statement::ExpressionStatement(Expression::Arrow(func)) => Some(Candidate {
                func: Some(func),
                name: None,
                is_arrow: true,
                is_async: func.is_async,
                is_generator: func.is_generator,
                is_expression: false,
            }),
            Statement::ExpressionStatement(Expression::Function(func)) => Some(Candidate {
                // The wrapper statement has no params/body; flags only
                func: None,
                name: None,
                is_arrow: false,
                is_async: func.is_async,
                is_generator: func.is_generator,
                is_expression: false,
            }),
            Statement::ExpressionStatement(Expression::Other) | Statement::Other => None,
        };

        if let Some(candidate) = candidate {
            if selected.is_some() {
                bail!("source contains more than one top-level function-bearing statement");
            }
            selected = Some(candidate);
        }
    }

    Ok(selected)
}
