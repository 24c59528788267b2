//! # UTF-8 Decode Policy

use crate::{errors::BPResult, support::strings::string_from_utf8_lossy};

/// How decoded bytes which are not valid UTF-8 become text.
///
/// Decoding a complete, valid encoding always yields valid UTF-8;
/// invalid sequences appear when decoding arbitrary or truncated token
/// lists, whose boundaries may fall inside a multi-byte code point.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum DecodePolicy {
    /// Fail with [`crate::BytePairError::Encoding`].
    Strict,

    /// Replace each invalid sequence with ``U+FFFD``.
    #[default]
    Replace,
}

impl DecodePolicy {
    /// Convert decoded bytes to a string under this policy.
    ///
    /// ## Arguments
    /// * `bytes` - the decoded bytes.
    ///
    /// ## Returns
    /// The text, or an error under [`DecodePolicy::Strict`].
    pub fn bytes_to_string(
        self,
        bytes: Vec<u8>,
    ) -> BPResult<String> {
        match self {
            Self::Strict => Ok(String::from_utf8(bytes)?),
            Self::Replace => Ok(string_from_utf8_lossy(bytes)),
        }
    }
}
