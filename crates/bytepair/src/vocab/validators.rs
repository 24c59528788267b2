//! Validators for vocabulary configuration options.
use crate::{errors::BytePairError, types::TokenType, types::U8_SIZE};

/// Validates and returns the vocabulary size.
///
/// The size must cover the u8 space, and every id below it must fit in `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> crate::errors::BPResult<usize> {
    if vocab_size < U8_SIZE {
        Err(BytePairError::VocabSizeTooSmall { size: vocab_size })
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(BytePairError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u16>(256).unwrap(), 256);

        assert!(matches!(
            try_vocab_size::<u16>(100),
            Err(BytePairError::VocabSizeTooSmall { size: 100 })
        ));
        assert!(matches!(
            try_vocab_size::<u32>(0),
            Err(BytePairError::VocabSizeTooSmall { size: 0 })
        ));

        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(matches!(
            try_vocab_size::<u16>(u16::MAX as usize + 2),
            Err(BytePairError::VocabSizeOverflow { .. })
        ));

        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(try_vocab_size::<u8>(257).is_err());
    }
}
