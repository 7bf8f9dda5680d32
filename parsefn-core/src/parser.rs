//! Default parser adapter using SWC
//!
//! Global invariants enforced:
//! - Script mode, so non-strict sources (duplicate parameter names) parse
//! - Every span handed downstream is rebased to a byte offset into the input

use crate::ast::{self, ParamNode, ParseTree};
use anyhow::Result;
use swc_common::{sync::Lrc, BytePos, FileName, SourceFile, SourceMap, Spanned};
use swc_ecma_ast::{Decl, EsVersion, Expr, Pat, Script, Stmt};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};

/// Options forwarded to the parser call
///
/// A custom parser strategy receives these unmodified and may interpret
/// them as it pleases; the built-in parser uses them for syntax selection.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Parse as TypeScript instead of plain ECMAScript
    pub typescript: bool,
    /// Enable JSX in either syntax
    pub jsx: bool,
    /// Name used in parse diagnostics
    pub filename: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            typescript: false,
            jsx: false,
            filename: "<function>".to_string(),
        }
    }
}

/// Create SWC parser syntax configuration from the options
fn syntax_for(options: &ParserOptions) -> Syntax {
    if options.typescript {
        Syntax::Typescript(swc_ecma_parser::TsSyntax {
            tsx: options.jsx,
            decorators: false, // No experimental decorators
            dts: false,        // Snippets are never declaration files
            ..Default::default()
        })
    } else {
        Syntax::Es(swc_ecma_parser::EsSyntax {
            jsx: options.jsx,
            decorators: false, // No experimental decorators
            ..Default::default()
        })
    }
}

/// Parse a function-bearing source snippet into the neutral parse tree
///
/// Returns an error if parse errors occur. The error carries the underlying
/// SWC diagnostic message and is never caught by the extraction pipeline.
pub fn parse_source(src: &str, options: &ParserOptions) -> Result<ParseTree> {
    let cm: Lrc<SourceMap> = Default::default();

    // Create SourceFile for the source code
    let source_file: Lrc<SourceFile> = cm.new_source_file(
        FileName::Custom(options.filename.clone()).into(),
        src.to_string(),
    );

    // Create StringInput from SourceFile
    let input = StringInput::from(&*source_file);

    // Create lexer with selected syntax
    let lexer = Lexer::new(syntax_for(options), EsVersion::Es2022, input, None);

    // Create parser
    let mut parser = Parser::new_from(lexer);

    // Script mode: a module body is implicitly strict, which would reject
    // legal non-strict signatures such as `function f(a, a) {}`
    let script = parser.parse_script().map_err(|e| {
        let error_msg = e.kind().msg();
        anyhow::anyhow!("Parse error: {}", error_msg)
            .context(format!("Failed to parse source: {}", options.filename))
    })?;

    Ok(lower_script(&script, src, source_file.start_pos))
}

/// Rebase an SWC span to byte offsets into the input text
fn rel_span(span: swc_common::Span, base: BytePos) -> ast::Span {
    ast::Span {
        start: (span.lo.0 - base.0) as usize,
        end: (span.hi.0 - base.0) as usize,
    }
}

fn lower_script(script: &Script, src: &str, base: BytePos) -> ParseTree {
    let statements = script
        .body
        .iter()
        .map(|stmt| lower_stmt(stmt, src, base))
        .collect();
    ParseTree { statements }
}

fn lower_stmt(stmt: &Stmt, src: &str, base: BytePos) -> ast::Statement {
    match stmt {
        Stmt::Decl(Decl::Fn(fn_decl)) => {
            match lower_function(Some(&fn_decl.ident), &fn_decl.function, src, base) {
                Some(func) => ast::Statement::FunctionDeclaration(func),
                // Bodyless declaration (e.g. TS `declare`); nothing to slice
                None => ast::Statement::Other,
            }
        }
        Stmt::Expr(expr_stmt) => {
            ast::Statement::ExpressionStatement(lower_expr(&expr_stmt.expr, src, base))
        }
        _ => ast::Statement::Other,
    }
}

fn lower_expr(expr: &Expr, src: &str, base: BytePos) -> ast::Expression {
    match expr {
        // Babel parity: its AST carries no paren nodes, so `(() => {})`
        // classifies the same as the bare arrow
        Expr::Paren(paren) => lower_expr(&paren.expr, src, base),
        Expr::Arrow(arrow) => {
            let body_span = match &*arrow.body {
                swc_ecma_ast::BlockStmtOrExpr::BlockStmt(block) => block.span,
                swc_ecma_ast::BlockStmtOrExpr::Expr(expr) => expr.span(),
            };
            ast::Expression::Arrow(ast::FunctionNode {
                ident: None,
                is_async: arrow.is_async,
                is_generator: arrow.is_generator,
                params: arrow
                    .params
                    .iter()
                    .map(|pat| lower_pat(pat, src, base))
                    .collect(),
                body: rel_span(body_span, base),
            })
        }
        Expr::Fn(fn_expr) => {
            match lower_function(fn_expr.ident.as_ref(), &fn_expr.function, src, base) {
                Some(func) => ast::Expression::Function(func),
                None => ast::Expression::Other,
            }
        }
        _ => ast::Expression::Other,
    }
}

fn lower_function(
    ident: Option<&swc_ecma_ast::Ident>,
    function: &swc_ecma_ast::Function,
    src: &str,
    base: BytePos,
) -> Option<ast::FunctionNode> {
    let body = function.body.as_ref()?;
    Some(ast::FunctionNode {
        ident: ident.map(|ident| ast::Ident {
            name: ident.sym.to_string(),
            span: rel_span(ident.span, base),
        }),
        is_async: function.is_async,
        is_generator: function.is_generator,
        params: function
            .params
            .iter()
            .map(|param| lower_pat(&param.pat, src, base))
            .collect(),
        body: rel_span(body.span, base),
    })
}

fn lower_pat(pat: &Pat, src: &str, base: BytePos) -> ParamNode {
    match pat {
        Pat::Ident(binding) => ParamNode::Identifier {
            name: binding.id.sym.to_string(),
        },
        Pat::Assign(assign) => ParamNode::AssignmentPattern {
            left_name: pat_name(&assign.left, src, base),
            right: rel_span(assign.right.span(), base),
        },
        Pat::Rest(rest) => ParamNode::RestElement {
            argument_name: pat_name(&rest.arg, src, base),
        },
        other => ParamNode::Identifier {
            name: pattern_source(other, src, base),
        },
    }
}

fn pat_name(pat: &Pat, src: &str, base: BytePos) -> String {
    match pat {
        Pat::Ident(binding) => binding.id.sym.to_string(),
        other => pattern_source(other, src, base),
    }
}

/// Destructuring patterns carry no single binding name; the exact source
/// text of the pattern stands in so the parameter still fills one slot
fn pattern_source(pat: &Pat, src: &str, base: BytePos) -> String {
    let span = rel_span(pat.span(), base);
    src.get(span.start..span.end).unwrap_or_default().to_string()
}
