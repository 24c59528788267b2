//! # Error Types

use std::string::FromUtf8Error;

/// Errors from bytepair operations.
#[derive(Debug, thiserror::Error)]
pub enum BytePairError {
    /// Vocab size is below the minimum (256, the u8 space).
    #[error("vocab size ({size}) must be >= 256")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Tokenizer configuration is inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A persisted model is malformed, or has the wrong name.
    #[error("format error: {0}")]
    Format(String),

    /// A token id is not present in the vocabulary.
    #[error("unknown token id: {token}")]
    UnknownTokenId {
        /// The unknown token.
        token: u64,
    },

    /// Decoded bytes are not valid UTF-8 under the strict policy.
    #[error("decoded bytes are not valid utf-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BytePairError {
    /// Is this a configuration error?
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::VocabSizeTooSmall { .. }
                | Self::VocabSizeOverflow { .. }
                | Self::Configuration(_)
        )
    }

    /// Is this a format error?
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Result type for bytepair operations.
pub type BPResult<T> = core::result::Result<T, BytePairError>;
