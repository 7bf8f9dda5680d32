//! The public result record
//!
//! Global invariants enforced:
//! - Immutable once returned; one record per call
//! - Serialized field names match the original npm package (camelCase)

use crate::name::ANONYMOUS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural metadata for one function definition
///
/// `defaults` maps each parameter name to the exact source slice of its
/// default expression, or `None` when the parameter has no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub name: String,
    pub body: String,
    pub args: Vec<String>,
    pub params: String,
    pub defaults: BTreeMap<String, Option<String>>,
    pub orig: String,
    pub valid: bool,
    pub is_arrow: bool,
    pub is_async: bool,
    pub is_named: bool,
    pub is_anonymous: bool,
    pub is_generator: bool,
    pub is_expression: bool,
}

impl FunctionInfo {
    /// The all-defaults record every call starts from
    ///
    /// Invalid input returns this unchanged with `valid == false`; note the
    /// named/anonymous flags are both false in that case because name
    /// resolution never runs.
    pub(crate) fn defaults_record(orig: String, valid: bool) -> Self {
        FunctionInfo {
            name: ANONYMOUS.to_string(),
            body: String::new(),
            args: Vec::new(),
            params: String::new(),
            defaults: BTreeMap::new(),
            orig,
            valid,
            is_arrow: false,
            is_async: false,
            is_named: false,
            is_anonymous: false,
            is_generator: false,
            is_expression: false,
        }
    }
}
