//! Match engine: unanchored search of a [`Pattern`] over input bytes.
//!
//! All positions are **byte** offsets into the input. Input is decoded as
//! UTF-8 one character at a time; each element consumes exactly one
//! character, so there is never anything to backtrack into.

use super::ast::Pattern;
use super::char_class::element_matches;
use super::parser::{PatternError, parse};

/// The byte span of a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

// ─── Public API ─────────────────────────────────────────────────────────────

/// Test whether `pattern` matches anywhere in `input`.
///
/// A malformed pattern is reported as an error before any input is examined.
pub fn search(input: &[u8], pattern: &str) -> Result<bool, PatternError> {
    Ok(find(input, pattern)?.is_some())
}

/// Find the leftmost match of `pattern` in `input`.
pub fn find(input: &[u8], pattern: &str) -> Result<Option<Match>, PatternError> {
    Ok(parse(pattern)?.find(input))
}

/// Test whether a match begins exactly at byte offset `start`.
///
/// Offsets that fall inside a multi-byte character, or on bytes that are not
/// valid UTF-8, fail to decode and so never start a match (unless the pattern
/// is empty).
pub fn match_at(pattern: &Pattern, input: &[u8], start: usize) -> Option<Match> {
    let mut pos = start;
    for item in &pattern.items {
        if pos >= input.len() {
            return None;
        }
        let (ch, width) = decode_char(input, pos)?;
        if !element_matches(&item.element, ch) {
            log::trace!("{} rejects {ch:?} at {pos}", item.element);
            return None;
        }
        pos += width;
    }
    Some(Match { start, end: pos })
}

impl Pattern {
    /// Find the leftmost match, trying every start offset `0..=input.len()`.
    pub fn find(&self, input: &[u8]) -> Option<Match> {
        let found = (0..=input.len()).find_map(|start| match_at(self, input, start));
        if let Some(m) = found {
            log::debug!("pattern {self} matched bytes {}..{}", m.start, m.end);
        }
        found
    }

    pub fn is_match(&self, input: &[u8]) -> bool {
        self.find(input).is_some()
    }
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Decode the UTF-8 character starting at `pos`, with its encoded width.
///
/// Returns `None` for an invalid or truncated sequence.
fn decode_char(input: &[u8], pos: usize) -> Option<(char, usize)> {
    let tail = &input[pos..];
    let window = &tail[..tail.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(s) => s,
        Err(err) => std::str::from_utf8(&window[..err.valid_up_to()]).ok()?,
    };
    let ch = valid.chars().next()?;
    Some((ch, ch.len_utf8()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
