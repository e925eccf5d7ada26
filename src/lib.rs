//! A tiny `grep -E` work-alike.
//!
//! Patterns are matched one element per input character, starting at every
//! offset of the input in turn.
//!
//! # Example
//!
//! ```rust
//! use mygrep::{Pattern, PatternError, search};
//!
//! assert_eq!(search(b"abc123", r"\d"), Ok(true));
//! assert_eq!(search(b"abc", "[^abc]"), Ok(false));
//! assert_eq!(
//!     search(b"abc", "[abc"),
//!     Err(PatternError::UnclosedBracket { offset: 0 })
//! );
//!
//! // Parse once, match many times.
//! let pattern: Pattern = r"\w\w".parse().unwrap();
//! let m = pattern.find("-ok-".as_bytes()).unwrap();
//! assert_eq!((m.start, m.end), (1, 3));
//! ```

pub mod pattern;

pub use pattern::{Match, Pattern, PatternError, find, match_at, parse, search};
