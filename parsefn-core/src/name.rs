//! Name resolution
//!
//! Undoes the synthetic placeholder inserted by input normalization and
//! derives the named/anonymous flags.

use crate::input::PLACEHOLDER;

/// Marker used when a function carries no usable name
pub const ANONYMOUS: &str = "anonymous";

/// Final name plus the flags derived from it
pub struct ResolvedName {
    pub name: String,
    pub is_named: bool,
    pub is_anonymous: bool,
}

pub fn resolve(raw: Option<&str>) -> ResolvedName {
    let name = match raw {
        Some(name) if name != PLACEHOLDER => name.to_string(),
        _ => ANONYMOUS.to_string(),
    };
    let is_anonymous = name == ANONYMOUS;
    ResolvedName {
        is_named: !is_anonymous,
        is_anonymous,
        name,
    }
}
