//! # Special Words Vocabulary

use crate::{
    errors::{BPResult, BytePairError},
    types::{TokenType, U8_SIZE, WCHashMap, token_u64},
};

/// Token vocabulary for special words.
///
/// Special words are matched literally in text, and bypass byte merging.
/// Their ids are reserved: never byte tokens, never merge targets.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    /// The map of special words to tokens.
    word_tokens: WCHashMap<String, T>,
}

impl<T: TokenType> SpecialVocab<T> {
    /// Build a special vocab from ``(word, token)`` entries.
    ///
    /// ## Arguments
    /// * `special_words` - An iterator of word strings and tokens.
    ///
    /// ## Returns
    /// A `Result` containing the vocab, or the first invalid entry.
    pub fn from_words<W, S>(special_words: W) -> BPResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (word, token) in special_words {
            vocab.add_str_word(word.as_ref(), token)?;
        }
        Ok(vocab)
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.word_tokens.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.word_tokens.is_empty()
    }

    /// Add a word to the vocab.
    ///
    /// ## Arguments
    /// * `word` - The word string to add; non-empty, without line breaks.
    /// * `token` - The token value to assign to the word; must be ``>= 256``.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) -> BPResult<()> {
        if word.is_empty() || word.contains(['\n', '\r']) {
            return Err(BytePairError::Configuration(format!(
                "special token {word:?} must be non-empty and free of line breaks"
            )));
        }
        if token_u64(token) < U8_SIZE as u64 {
            return Err(BytePairError::Configuration(format!(
                "special token {word:?} uses byte token id {token}"
            )));
        }
        if self.word_tokens.contains_key(word) {
            return Err(BytePairError::Configuration(format!(
                "special token {word:?} is already registered"
            )));
        }
        if let Some(other) = self.lookup_word(&token) {
            return Err(BytePairError::Configuration(format!(
                "special token {word:?} reuses id {token} of {other:?}"
            )));
        }

        self.word_tokens.insert(word.to_string(), token);
        Ok(())
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_tokens.get(word).copied()
    }

    /// Get the associated word for a token, if any.
    pub fn lookup_word(
        &self,
        token: &T,
    ) -> Option<&str> {
        self.word_tokens
            .iter()
            .find_map(|(word, t)| (t == token).then_some(word.as_str()))
    }

    /// The special words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.word_tokens.keys().map(String::as_str)
    }

    /// The special tokens, in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = T> + '_ {
        self.word_tokens.values().copied()
    }

    /// The ``(word, token)`` entries, sorted by token.
    pub fn sorted_entries(&self) -> Vec<(&str, T)> {
        let mut entries: Vec<(&str, T)> = self
            .word_tokens
            .iter()
            .map(|(word, &token)| (word.as_str(), token))
            .collect();
        entries.sort_by_key(|&(_, t)| t);
        entries
    }

    /// The largest special token, if any.
    pub fn max_token(&self) -> Option<T> {
        self.word_tokens.values().max().copied()
    }

    /// The first special token in ``lo..hi``, if any.
    pub(crate) fn first_token_in(
        &self,
        lo: u64,
        hi: u64,
    ) -> Option<T> {
        self.sorted_entries()
            .into_iter()
            .map(|(_, t)| t)
            .find(|&t| (lo..hi).contains(&token_u64(t)))
    }
}
