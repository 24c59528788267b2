//! # Tokenizer Trait

use std::path::Path;

use crate::{
    decoders::DecodePolicy,
    errors::BPResult,
    io::{load_model_path, save_model_files},
    tokenizer::TokenizerModel,
    training::BpeTrainerOptions,
    types::TokenType,
};

/// The capability set shared by tokenizer variants.
pub trait Tokenizer<T: TokenType> {
    /// The trained state.
    fn model(&self) -> &TokenizerModel<T>;

    /// Replace the trained state wholesale.
    ///
    /// ## Arguments
    /// * `model` - the new state.
    fn replace_model(
        &mut self,
        model: TokenizerModel<T>,
    ) -> BPResult<()>;

    /// The policy used by [`Tokenizer::decode`].
    fn decode_policy(&self) -> DecodePolicy;

    /// Train a new merge history on `text`.
    ///
    /// Existing merges are discarded; the pattern and special tokens are kept.
    ///
    /// ## Arguments
    /// * `text` - the training text.
    /// * `options` - the trainer options.
    fn train(
        &mut self,
        text: &str,
        options: &BpeTrainerOptions,
    ) -> BPResult<()>;

    /// Encode text into tokens.
    ///
    /// Special token literals in `text` encode to their reserved ids.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T>;

    /// Decode tokens into their concatenated bytes.
    ///
    /// ## Returns
    /// The bytes, or [`crate::BytePairError::UnknownTokenId`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BPResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.model().vocab().extend_bytes(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decode tokens into text, under [`Tokenizer::decode_policy`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn decode(
        &self,
        tokens: &[T],
    ) -> BPResult<String> {
        self.decode_with_policy(tokens, self.decode_policy())
    }

    /// Decode tokens into text, under an explicit policy.
    fn decode_with_policy(
        &self,
        tokens: &[T],
        policy: DecodePolicy,
    ) -> BPResult<String> {
        policy.bytes_to_string(self.decode_to_bytes(tokens)?)
    }

    /// Write ``{prefix}.model`` and ``{prefix}.vocab``.
    fn save<P: AsRef<Path>>(
        &self,
        file_prefix: P,
    ) -> BPResult<()> {
        save_model_files(self.model(), file_prefix)
    }

    /// Load a ``*.model`` file, replacing the trained state.
    fn load<P: AsRef<Path>>(
        &mut self,
        model_path: P,
    ) -> BPResult<()> {
        let model = load_model_path(model_path)?;
        self.replace_model(model)
    }
}
