//! String split/join over [`GrowArray`].
//!
//! `split` scans the input once: every run of characters not in the
//! delimiter set becomes one token, terminated by a delimiter or by
//! end-of-string. Empty runs are preserved as empty tokens, so `"a::b"`
//! yields `a`, `` and `b`, and a trailing delimiter yields a final empty
//! token. `join_range` is the inverse for an inclusive token sub-range,
//! except that empty tokens contribute neither text nor a separator.

use crate::grow_array::GrowArray;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("cannot split an empty input")]
    EmptyInput,
}

const INITIAL_TOKEN_SLOTS: usize = 8;

/// Split `input` on any character in `delimiters` into an ordered token
/// array.
pub fn split(input: &str, delimiters: &[char]) -> Result<GrowArray<String>, TokenError> {
    if input.is_empty() {
        return Err(TokenError::EmptyInput);
    }
    let mut tokens = GrowArray::new(INITIAL_TOKEN_SLOTS, true);
    let mut current = String::new();
    for ch in input.chars() {
        if delimiters.contains(&ch) {
            append(&mut tokens, std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    // The final run is a token even when empty (trailing delimiter).
    append(&mut tokens, current);
    Ok(tokens)
}

fn append(tokens: &mut GrowArray<String>, token: String) {
    // Appending at `count` on an auto-grow array cannot be rejected.
    let _ = tokens.push(token);
}

/// Join tokens `[from, to]` (inclusive) with `separator` between them.
/// `None` or an out-of-range `to` means "to the end". Empty tokens are
/// skipped entirely. Returns `None` when `from` is at or past the token
/// count.
pub fn join_range(
    tokens: &GrowArray<String>,
    from: usize,
    to: Option<usize>,
    separator: char,
) -> Option<String> {
    let count = tokens.count();
    if from >= count {
        return None;
    }
    let end = match to {
        Some(t) if t + 1 < count => t + 1,
        _ => count,
    };
    let mut joined = String::new();
    for index in from..end {
        let Some(token) = tokens.get(index) else {
            continue;
        };
        if token.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(separator);
        }
        joined.push_str(token);
    }
    Some(joined)
}

/// Join every token with `separator`.
pub fn join(tokens: &GrowArray<String>, separator: char) -> Option<String> {
    join_range(tokens, 0, None, separator)
}

/// Join tokens from `from` to the end.
pub fn join_from(tokens: &GrowArray<String>, from: usize, separator: char) -> Option<String> {
    join_range(tokens, from, None, separator)
}
