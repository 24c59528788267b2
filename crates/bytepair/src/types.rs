//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A pair of adjacent tokens.
pub type Pair<T> = (T, T);

/// The size of the u8 space; also the first id available to merges.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// The identity byte token for `byte`.
///
/// Every [`TokenType`] holds the full u8 range.
#[inline(always)]
pub fn byte_token<T: TokenType>(byte: u8) -> T {
    T::from_u8(byte).expect("u8 fits every unsigned token type")
}

/// Translate raw bytes to their identity byte tokens.
pub fn byte_tokens<T: TokenType>(bytes: &[u8]) -> Vec<T> {
    bytes.iter().map(|&b| byte_token(b)).collect()
}

/// Widen a token to `u64`, for messages and file formats.
#[inline(always)]
pub fn token_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = ahash::AHashSet<V>;
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = foldhash::HashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WCHashSet<V> = std::collections::HashSet<V>;
    }
}
