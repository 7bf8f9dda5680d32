//! Body extraction
//!
//! Global invariants enforced:
//! - Interior whitespace is preserved exactly
//! - At most one brace pair is stripped, and only when both ends match

use crate::ast::Span;
use anyhow::Result;

/// Slice the body text and unwrap a block body to its statement text
///
/// A concise (brace-less) arrow body passes through untouched. An empty
/// block yields `""`.
pub fn extract(body: &Span, orig: &str) -> Result<String> {
    let text = body.slice(orig)?;
    let bytes = text.as_bytes();

    if bytes.first() == Some(&b'{') && bytes.last() == Some(&b'}') {
        Ok(text[1..text.len() - 1].to_string())
    } else {
        Ok(text.to_string())
    }
}
