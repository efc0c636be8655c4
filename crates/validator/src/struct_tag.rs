//! Struct tag strings
//!
//! Parses the conventional `key:"value" key:"value"` tag syntax into a
//! constraint list, so field constraints can be declared as data (see
//! [`Schema`](crate::json::Schema)). Keys that are not one of the six
//! recognised tags are ignored.

use crate::error::ValidatorError;
use crate::tag::{Constraint, Tag};

/// Parses a struct tag string into constraints, in declaration order.
///
/// ```
/// use fieldguard::{Tag, parse_struct_tag};
///
/// let constraints = parse_struct_tag(r#"required:"true" maxLen:"50" json:"name""#).unwrap();
/// let tags: Vec<Tag> = constraints.iter().map(|c| c.tag).collect();
/// assert_eq!(tags, [Tag::Required, Tag::MaxLen]);
/// ```
pub fn parse_struct_tag(tag: &str) -> Result<Vec<Constraint>, ValidatorError> {
    let syntax = |reason| ValidatorError::TagSyntax {
        tag: tag.to_owned(),
        reason,
    };

    let mut constraints = Vec::new();
    let mut rest = tag.trim_start_matches(' ');

    while !rest.is_empty() {
        let key_len = rest
            .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\u{7f}')
            .unwrap_or(rest.len());
        if key_len == 0 {
            return Err(syntax("expected a key"));
        }
        let key = &rest[..key_len];
        rest = &rest[key_len..];

        rest = rest
            .strip_prefix(":\"")
            .ok_or_else(|| syntax("expected `:\"` after key"))?;

        let (value, remainder) = unquote(rest).ok_or_else(|| syntax("unterminated or invalid quoted value"))?;
        rest = remainder.trim_start_matches(' ');

        match Tag::from_key(key) {
            Some(tag) => constraints.push(Constraint::owned(tag, value)),
            None => tracing::trace!(key, "ignoring unrecognised struct tag key"),
        }
    }

    Ok(constraints)
}

/// Reads a quoted value whose opening quote was already consumed. Returns
/// the unescaped value and the input after the closing quote.
fn unquote(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &input[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(match escaped {
                    '"' => '"',
                    '\\' => '\\',
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    _ => return None,
                });
            }
            '\n' => return None,
            c => value.push(c),
        }
    }
    None
}
