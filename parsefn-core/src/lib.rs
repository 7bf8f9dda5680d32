//! parsefn core library - structural introspection of a single
//! JavaScript/TypeScript function definition
//!
//! Produces one immutable [`FunctionInfo`] record per call: name, ordered
//! parameter names, per-parameter default-value source text, body source
//! text, and classification flags.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - One function definition per call; no state outside a call
// - No randomness, clocks, threads, or async
// - Default and body values are exact source slices
// - Invalid input never reaches the parser
// - Identical input yields identical output

pub mod ast;
pub mod body;
pub mod classify;
pub mod input;
pub mod name;
pub mod params;
pub mod parser;
pub mod record;

pub use input::{CallableSource, Input};
pub use name::ANONYMOUS;
pub use parser::ParserOptions;
pub use record::FunctionInfo;

use anyhow::Result;
use ast::ParseTree;

/// Parser strategy: turns source text into the neutral parse tree
pub type ParserFn = Box<dyn Fn(&str, &ParserOptions) -> Result<ParseTree>>;

/// Options for one `parse_function` call
#[derive(Default)]
pub struct Options {
    /// Parser strategy; `None` selects the built-in SWC parser
    pub parser: Option<ParserFn>,
    /// Options forwarded unmodified to the parser call
    pub parser_options: ParserOptions,
}

/// Introspect a single function definition into a [`FunctionInfo`] record
///
/// `code` is source text or a callable whose source the embedder supplies;
/// any other input yields the all-defaults record with `valid == false`
/// without invoking the parser. Syntactically invalid source propagates the
/// parser diagnostic as an error, as does a source with more than one
/// top-level function-bearing statement. Parseable source with no such
/// statement yields a `valid == true` record with default fields.
pub fn parse_function<I: Into<Input>>(code: I, options: &Options) -> Result<FunctionInfo> {
    let normalized = input::normalize(code.into());
    if !normalized.valid {
        return Ok(FunctionInfo::defaults_record(normalized.orig, false));
    }

    let tree = match &options.parser {
        Some(parse) => parse(&normalized.orig, &options.parser_options)?,
        None => parser::parse_source(&normalized.orig, &options.parser_options)?,
    };

    let Some(candidate) = classify::select(&tree)? else {
        // No usable top-level function; defaults stand
        let resolved = name::resolve(None);
        return Ok(FunctionInfo {
            is_named: resolved.is_named,
            is_anonymous: resolved.is_anonymous,
            ..FunctionInfo::defaults_record(normalized.orig, true)
        });
    };

    let (extracted, body) = match candidate.func {
        Some(func) => (
            params::extract(func, &normalized.orig)?,
            body::extract(&func.body, &normalized.orig)?,
        ),
        // Wrapper without params/body fields: flags only
        None => (params::ExtractedParams::default(), String::new()),
    };
    let resolved = name::resolve(candidate.name);

    Ok(FunctionInfo {
        name: resolved.name,
        body,
        args: extracted.args,
        params: extracted.params,
        defaults: extracted.defaults,
        orig: normalized.orig,
        valid: true,
        is_arrow: candidate.is_arrow,
        is_async: candidate.is_async,
        is_named: resolved.is_named,
        is_anonymous: resolved.is_anonymous,
        is_generator: candidate.is_generator,
        is_expression: candidate.is_expression,
    })
}
