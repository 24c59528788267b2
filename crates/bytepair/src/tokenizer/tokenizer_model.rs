//! # Persisted Tokenizer State

use crate::{
    errors::{BPResult, BytePairError},
    types::TokenType,
    vocab::{MergeHistory, SpecialVocab, Vocabulary},
};

/// The complete trained state of a tokenizer.
///
/// Holds the pre-tokenization pattern, the special tokens, the merge
/// history, and the vocabulary derived from them. The vocabulary is
/// always rebuilt from the other parts; it is never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerModel<T: TokenType> {
    pattern: String,
    specials: SpecialVocab<T>,
    merges: MergeHistory<T>,
    vocab: Vocabulary<T>,
}

impl<T: TokenType> Default for TokenizerModel<T> {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            specials: SpecialVocab::default(),
            merges: MergeHistory::default(),
            vocab: Vocabulary::bytes_only(),
        }
    }
}

impl<T: TokenType> TokenizerModel<T> {
    /// Assemble a model, rebuilding its vocabulary.
    ///
    /// ## Arguments
    /// * `pattern` - the pre-tokenization pattern; stored, never compiled.
    /// * `specials` - the special tokens.
    /// * `merges` - the merge history.
    ///
    /// ## Returns
    /// A `Result` containing the model, or a configuration error if the
    /// pattern spans lines, or a special token id is also a merge target.
    pub fn new<S: Into<String>>(
        pattern: S,
        specials: SpecialVocab<T>,
        merges: MergeHistory<T>,
    ) -> BPResult<Self> {
        let pattern = pattern.into();
        if pattern.contains(['\n', '\r']) {
            return Err(BytePairError::Configuration(format!(
                "pattern {pattern:?} must not contain line breaks"
            )));
        }
        for (word, token) in specials.sorted_entries() {
            if merges.is_known_token(token) {
                return Err(BytePairError::Configuration(format!(
                    "special token {word:?} id {token} is also a merge target"
                )));
            }
        }

        let vocab = Vocabulary::build(&merges, &specials)?;
        Ok(Self {
            pattern,
            specials,
            merges,
            vocab,
        })
    }

    /// The pre-tokenization pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The special tokens.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    /// The merge history.
    pub fn merges(&self) -> &MergeHistory<T> {
        &self.merges
    }

    /// The derived vocabulary.
    pub fn vocab(&self) -> &Vocabulary<T> {
        &self.vocab
    }
}
