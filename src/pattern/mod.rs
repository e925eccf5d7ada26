//! mygrep pattern matching engine.
//!
//! A pattern is a sequence of elements. Each element matches exactly one
//! input character, and the pattern may match starting at any offset in the
//! input.
//!
//! # Pattern syntax
//!
//! | Token       | Meaning                                          |
//! |-------------|--------------------------------------------------|
//! | `c`         | The character `c`                                |
//! | `\d`        | One decimal digit (Unicode Nd)                   |
//! | `\w`        | One letter (Unicode L), decimal digit or `_`     |
//! | `\x`        | Any other escape; never matches                  |
//! | `\` at end  | A literal backslash                              |
//! | `[abc]`     | One of the listed characters                     |
//! | `[^abc]`    | Any character except the listed ones             |
//!
//! There are no quantifiers, alternation, anchors or groups.

pub mod ast;
pub mod char_class;
pub mod matcher;
pub mod parser;

pub use ast::{BracketGroup, ClassKind, Element, Pattern};
pub use matcher::{Match, find, match_at, search};
pub use parser::{PatternError, parse, parse_element};
