//! # Token Decoding
//!
//! Tokens decode to bytes by concatenating their vocabulary spans.
//! Byte spans of single tokens may split a multi-byte UTF-8 code point,
//! so text conversion is governed by an explicit [`DecodePolicy`].

mod decode_policy;

#[doc(inline)]
pub use decode_policy::DecodePolicy;
