//! Input normalization
//!
//! Global invariants enforced:
//! - Invalid input never reaches the parser
//! - Every function-bearing statement carries a name token after rewrite

use regex::Regex;

/// Synthetic identifier inserted into anonymous `function (` signatures so
/// every declaration carries a name token. Reverted by the name resolver.
pub(crate) const PLACEHOLDER: &str = "____parsefn_placeholder____";

/// A callable value whose source text the embedding runtime can produce
pub trait CallableSource {
    fn source_text(&self) -> String;
}

/// Input accepted by `parse_function`
///
/// Anything that is neither source text nor a callable maps to `None` and
/// yields the all-defaults record with `valid == false`.
pub enum Input {
    Source(String),
    Callable(Box<dyn CallableSource>),
    None,
}

impl From<&str> for Input {
    fn from(code: &str) -> Self {
        Input::Source(code.to_string())
    }
}

impl From<String> for Input {
    fn from(code: String) -> Self {
        Input::Source(code)
    }
}

impl From<Option<&str>> for Input {
    fn from(code: Option<&str>) -> Self {
        match code {
            Some(code) => Input::Source(code.to_string()),
            None => Input::None,
        }
    }
}

impl From<Box<dyn CallableSource>> for Input {
    fn from(callable: Box<dyn CallableSource>) -> Self {
        Input::Callable(callable)
    }
}

/// Normalized input: the text all downstream spans index into
pub struct Normalized {
    pub orig: String,
    pub valid: bool,
}

/// Coerce input to source text and rewrite an anonymous signature
///
/// The first `function (` with no following name gets the synthetic
/// placeholder spliced in after `function`, so the parser sees a named
/// declaration. Only the first match is rewritten. Empty or absent input
/// is invalid; the rewritten text becomes `orig` for the whole call.
pub fn normalize(input: Input) -> Normalized {
    let code = match input {
        Input::Source(code) => code,
        Input::Callable(callable) => callable.source_text(),
        Input::None => String::new(),
    };

    if code.is_empty() {
        return Normalized {
            orig: String::new(),
            valid: false,
        };
    }

    static ANON_RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    let anon_re = ANON_RE.get_or_init(|| Regex::new(r"function *\(").unwrap());

    let orig = anon_re
        .replace(&code, format!("function {PLACEHOLDER}("))
        .into_owned();

    Normalized { orig, valid: true }
}
