//! # Pair Merger

use crate::types::{Pair, TokenType};

/// Replace every non-overlapping occurrence of `pair` with `replacement`.
///
/// The scan is left-to-right; a match consumes both tokens,
/// so ``[5, 5, 5]`` merging ``(5, 5)`` yields ``[x, 5]``.
///
/// ## Arguments
/// * `tokens` - the input sequence; not modified.
/// * `pair` - the pair to replace.
/// * `replacement` - the token to write in its place.
///
/// ## Returns
/// The merged sequence.
pub fn merge_pair<T: TokenType>(
    tokens: &[T],
    pair: Pair<T>,
    replacement: T,
) -> Vec<T> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if i + 1 < tokens.len() && tokens[i] == pair.0 && tokens[i + 1] == pair.1 {
            merged.push(replacement);
            i += 2;
        } else {
            merged.push(tokens[i]);
            i += 1;
        }
    }
    merged
}
