//! AST types for mygrep patterns.

use std::fmt;

use itertools::Itertools;

/// A fully parsed pattern.
///
/// Items appear in pattern order; each one is matched against exactly one
/// input character. An empty pattern has no items and matches everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(crate) items: Vec<Item>,
}

impl Pattern {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements (not bytes) in the pattern.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.items.iter().map(|item| &item.element)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements().format(""))
    }
}

/// One element together with the number of pattern bytes it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub element: Element,
    /// Records how the source pattern was split; matching never reads it.
    /// The widths of all items add up to the pattern's length in bytes.
    pub width: usize,
}

/// One indivisible unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A single character, matched by exact equality.
    Literal(char),
    /// A `\x` escape.
    Class(ClassKind),
    /// A `[...]` or `[^...]` group.
    Group(BracketGroup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Digit, // \d
    Word,  // \w
    /// Any other escaped character. Never matches.
    Unknown(char),
}

/// The members of a bracket group, in pattern order.
///
/// Duplicates are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketGroup {
    pub negated: bool,
    pub members: Vec<char>,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Literal(c) => write!(f, "{c}"),
            Element::Class(kind) => write!(f, "{kind}"),
            Element::Group(group) => write!(f, "{group}"),
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKind::Digit => f.write_str(r"\d"),
            ClassKind::Word => f.write_str(r"\w"),
            ClassKind::Unknown(c) => write!(f, "\\{c}"),
        }
    }
}

impl fmt::Display for BracketGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let caret = if self.negated { "^" } else { "" };
        write!(f, "[{caret}{}]", self.members.iter().format(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_renders_back_to_syntax() {
        let group = BracketGroup {
            negated: true,
            members: vec!['a', 'b', 'c'],
        };
        assert_eq!(group.to_string(), "[^abc]");
    }

    #[test]
    fn class_renders_back_to_syntax() {
        assert_eq!(Element::Class(ClassKind::Digit).to_string(), r"\d");
        assert_eq!(Element::Class(ClassKind::Word).to_string(), r"\w");
        assert_eq!(Element::Class(ClassKind::Unknown('q')).to_string(), r"\q");
    }

    #[test]
    fn pattern_renders_elements_in_order() {
        let pattern = Pattern {
            items: vec![
                Item {
                    element: Element::Literal('x'),
                    width: 1,
                },
                Item {
                    element: Element::Class(ClassKind::Digit),
                    width: 2,
                },
                Item {
                    element: Element::Group(BracketGroup {
                        negated: false,
                        members: vec!['y', 'z'],
                    }),
                    width: 4,
                },
            ],
        };
        assert_eq!(pattern.len(), 3);
        assert!(!pattern.is_empty());
        assert_eq!(pattern.to_string(), r"x\d[yz]");
    }
}
