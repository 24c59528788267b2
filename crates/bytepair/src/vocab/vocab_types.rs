//! # Vocabulary Types

use crate::types::{Pair, WCHashMap};

/// `{ Pair<T> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `pair_tokens`, or `pair_token_map`.
pub type PairTokenMap<T> = WCHashMap<Pair<T>, T>;

/// `{ T -> Pair<T> }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_pairs`, or `token_pair_map`.
pub type TokenPairMap<T> = WCHashMap<T, Pair<T>>;

/// `{ T -> Vec<u8> }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_spans`, or `token_span_map`.
pub type TokenSpanMap<T> = WCHashMap<T, Vec<u8>>;
