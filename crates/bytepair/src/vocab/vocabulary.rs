//! # Token ``{ T -> Vec<u8> }`` Vocabulary

use crate::{
    errors::{BPResult, BytePairError},
    types::{TokenType, U8_SIZE, token_u64},
    vocab::{MergeHistory, SpecialVocab, TokenSpanMap},
};

/// The byte span of every known token.
///
/// * ``vocab[b]`` for a byte token is ``[b]``,
/// * ``vocab[t]`` for a merge ``(a, b) -> t`` is ``vocab[a] ++ vocab[b]``,
/// * ``vocab[t]`` for a special token is the UTF-8 of its word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    token_spans: TokenSpanMap<T>,
}

impl<T: TokenType> Vocabulary<T> {
    /// The byte-only vocabulary.
    pub fn bytes_only() -> Self {
        let mut token_spans = TokenSpanMap::default();
        for b in 0..U8_SIZE {
            token_spans.insert(crate::types::byte_token(b as u8), vec![b as u8]);
        }
        Self { token_spans }
    }

    /// Rebuild the vocabulary from a merge history and special tokens.
    ///
    /// Merges are expanded in creation order; special tokens are added last.
    /// Calling this twice on the same inputs yields identical results.
    ///
    /// ## Arguments
    /// * `merges` - the merge history.
    /// * `specials` - the special tokens.
    ///
    /// ## Returns
    /// A `Result` containing the vocabulary, or an error if a merge
    /// parent has not been resolved before its use.
    pub fn build(
        merges: &MergeHistory<T>,
        specials: &SpecialVocab<T>,
    ) -> BPResult<Self> {
        let mut vocab = Self::bytes_only();

        for ((a, b), token) in merges.iter() {
            let mut span = vocab.try_span(a)?.to_vec();
            span.extend_from_slice(vocab.try_span(b)?);
            vocab.token_spans.insert(token, span);
        }

        for (word, token) in specials.sorted_entries() {
            vocab.token_spans.insert(token, word.as_bytes().to_vec());
        }

        Ok(vocab)
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.token_spans.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.token_spans.is_empty()
    }

    /// The byte span of a token, if known.
    pub fn get(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_spans.get(&token).map(Vec::as_slice)
    }

    /// The byte span of a token.
    ///
    /// ## Returns
    /// The span, or [`BytePairError::UnknownTokenId`].
    pub fn try_span(
        &self,
        token: T,
    ) -> BPResult<&[u8]> {
        self.get(token).ok_or(BytePairError::UnknownTokenId {
            token: token_u64(token),
        })
    }

    /// All tokens, in ascending order.
    pub fn sorted_tokens(&self) -> Vec<T> {
        let mut tokens: Vec<T> = self.token_spans.keys().copied().collect();
        tokens.sort();
        tokens
    }

    /// ``(token, span)`` entries, in ascending token order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (T, &[u8])> + '_ {
        self.sorted_tokens()
            .into_iter()
            .filter_map(move |t| self.get(t).map(|span| (t, span)))
    }

    /// Append the bytes of `tokens` to `buf`.
    pub fn extend_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BPResult<()> {
        for &token in tokens {
            buf.extend_from_slice(self.try_span(token)?);
        }
        Ok(())
    }
}
