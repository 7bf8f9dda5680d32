//! Parameter extraction
//!
//! Global invariants enforced:
//! - Parameter order is preserved; `params == args.join(", ")`
//! - Default values are exact source slices, never re-serialized

use crate::ast::{FunctionNode, ParamNode};
use anyhow::Result;
use std::collections::BTreeMap;

/// Ordered names and per-name default slices for one signature
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedParams {
    pub args: Vec<String>,
    pub params: String,
    pub defaults: BTreeMap<String, Option<String>>,
}

/// Walk the parameter list in order and collect names and defaults
///
/// Names are not deduplicated: a non-strict source may repeat a name and
/// both occurrences appear in `args`, while `defaults` keeps the last
/// occurrence's value.
pub fn extract(func: &FunctionNode, orig: &str) -> Result<ExtractedParams> {
    let mut args = Vec::with_capacity(func.params.len());
    let mut defaults = BTreeMap::new();

    for param in &func.params {
        let (name, default) = match param {
            ParamNode::Identifier { name } => (name.clone(), None),
            ParamNode::AssignmentPattern { left_name, right } => {
                (left_name.clone(), Some(right.slice(orig)?.to_string()))
            }
            ParamNode::RestElement { argument_name } => (argument_name.clone(), None),
        };
        defaults.insert(name.clone(), default);
        args.push(name);
    }

    let params = args.join(", ");
    Ok(ExtractedParams {
        args,
        params,
        defaults,
    })
}
