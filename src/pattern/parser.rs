//! Element-at-a-time parser for mygrep pattern strings.

use std::str::FromStr;

use phf::{Map, phf_map};

use super::ast::*;

/// Errors that can occur while parsing a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `[` with no `]` anywhere after it. `offset` is the byte offset of the `[`.
    UnclosedBracket { offset: usize },
}

impl PatternError {
    fn shifted(self, by: usize) -> Self {
        match self {
            Self::UnclosedBracket { offset } => Self::UnclosedBracket { offset: offset + by },
        }
    }
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclosedBracket { offset } => {
                write!(f, "Unclosed bracket group '[' at offset {offset} in pattern")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Escape letters with a built-in meaning.
const ESCAPE_CLASSES: Map<char, ClassKind> = phf_map! {
    'd' => ClassKind::Digit,
    'w' => ClassKind::Word,
};

/// Parse a whole pattern string into a [`Pattern`].
///
/// Stops at the first malformed element.
pub fn parse(input: &str) -> Result<Pattern, PatternError> {
    let mut items = Vec::new();
    let mut offset = 0;
    while let Some((element, width)) =
        parse_element(&input[offset..]).map_err(|err| err.shifted(offset))?
    {
        items.push(Item { element, width });
        offset += width;
    }
    debug_assert_eq!(items.iter().map(|item| item.width).sum::<usize>(), input.len());
    log::debug!("parsed pattern {input:?} into {} element(s)", items.len());
    Ok(Pattern { items })
}

/// Parse the next element from the front of `pattern`.
///
/// Returns the element and its width in bytes, or `None` when `pattern` is
/// empty. The width is always at least 1 and never more than
/// `pattern.len()`.
pub fn parse_element(pattern: &str) -> Result<Option<(Element, usize)>, PatternError> {
    let mut chars = pattern.chars();
    let Some(first) = chars.next() else {
        return Ok(None);
    };

    match first {
        '\\' => match chars.next() {
            Some(c) => {
                let kind = ESCAPE_CLASSES
                    .get(&c)
                    .copied()
                    .unwrap_or(ClassKind::Unknown(c));
                Ok(Some((Element::Class(kind), 1 + c.len_utf8())))
            }
            // Trailing backslash: a literal '\'.
            None => Ok(Some((Element::Literal('\\'), 1))),
        },
        '[' => {
            let close = pattern[1..]
                .find(']')
                .map(|i| i + 1)
                .ok_or(PatternError::UnclosedBracket { offset: 0 })?;
            let body = &pattern[1..close];
            let (negated, members) = match body.strip_prefix('^') {
                Some(rest) => (true, rest),
                None => (false, body),
            };
            let group = BracketGroup {
                negated,
                members: members.chars().collect(),
            };
            Ok(Some((Element::Group(group), close + 1)))
        }
        c => Ok(Some((Element::Literal(c), c.len_utf8()))),
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
