//! Literal forms: `/pattern/flags` text → regex literal.

use cb_ast::{Ast, Kind};

use crate::error::RuleError;
use crate::path::Path;
use crate::session::Session;

pub(crate) fn regex_literal(
    ast: &mut Ast,
    _session: &mut Session,
    path: &Path<'_>,
) -> Result<bool, RuleError> {
    let Kind::RegExp { value } = ast.kind(path.node()) else {
        return Ok(false);
    };
    let (pattern, flags) = split_regex(value).ok_or_else(|| RuleError::MalformedRegex {
        value: value.clone(),
    })?;
    let lowered = Kind::RegexLiteral {
        pattern: pattern.to_string(),
        flags: flags.to_string(),
    };
    ast.replace(path.node(), lowered);
    Ok(true)
}

/// Split `/pattern/flags` at its delimiting slashes. The closing slash is the
/// last one, so slashes inside the pattern are kept.
fn split_regex(value: &str) -> Option<(&str, &str)> {
    let body = value.strip_prefix('/')?;
    let close = body.rfind('/')?;
    let (pattern, flags) = (&body[..close], &body[close + 1..]);
    if pattern.is_empty() {
        return None;
    }
    Some((pattern, flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pattern_from_flags() {
        assert_eq!(split_regex("/ab+c/gi"), Some(("ab+c", "gi")));
        assert_eq!(split_regex("/a\\/b/"), Some(("a\\/b", "")));
        assert_eq!(split_regex("/x/y/m"), Some(("x/y", "m")));
    }

    #[test]
    fn rejects_text_without_delimiters() {
        assert_eq!(split_regex("abc"), None);
        assert_eq!(split_regex("/abc"), None);
        assert_eq!(split_regex("//g"), None);
    }
}
