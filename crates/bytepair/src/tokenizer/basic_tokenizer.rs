//! # Basic Byte Tokenizer

use crate::{
    decoders::DecodePolicy,
    errors::BPResult,
    tokenizer::{SpecialSplitter, TextSpan, Tokenizer, TokenizerModel},
    training::{BpeTrainerOptions, merge_pair, train_merge_history},
    types::{TokenType, byte_tokens},
    vocab::SpecialVocab,
};

/// BPE over the raw bytes of the whole text.
///
/// The pattern is stored with the model, but this variant never splits
/// text with it.
#[derive(Debug, Clone, Default)]
pub struct BasicTokenizer<T: TokenType = u32> {
    model: TokenizerModel<T>,
    decode_policy: DecodePolicy,
    splitter: SpecialSplitter<T>,
}

impl<T: TokenType> BasicTokenizer<T> {
    /// Create an untrained tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tokenizer around an existing model.
    pub fn from_model(model: TokenizerModel<T>) -> BPResult<Self> {
        let mut tokenizer = Self::default();
        tokenizer.replace_model(model)?;
        Ok(tokenizer)
    }

    /// Sets the stored pre-tokenization pattern.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern; must fit on one line.
    pub fn with_pattern<S: Into<String>>(
        self,
        pattern: S,
    ) -> BPResult<Self> {
        let model = TokenizerModel::new(
            pattern,
            self.model.specials().clone(),
            self.model.merges().clone(),
        )?;
        Ok(Self { model, ..self })
    }

    /// Sets the decode policy.
    pub fn with_decode_policy(
        self,
        decode_policy: DecodePolicy,
    ) -> Self {
        Self {
            decode_policy,
            ..self
        }
    }

    /// Register special tokens.
    ///
    /// ## Arguments
    /// * `special_words` - ``(word, token)`` entries; ids must be ``>= 256``,
    ///   and must not collide with existing special tokens or merge targets.
    pub fn register_special_tokens<W, S>(
        &mut self,
        special_words: W,
    ) -> BPResult<()>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut specials = self.model.specials().clone();
        for (word, token) in special_words {
            specials.add_str_word(word.as_ref(), token)?;
        }
        let model = TokenizerModel::new(
            self.model.pattern(),
            specials,
            self.model.merges().clone(),
        )?;
        self.replace_model(model)
    }

    /// Encode text into tokens, treating special token literals as plain text.
    pub fn encode_ordinary(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode bytes, applying learned merges earliest-first.
    ///
    /// Each round finds the present pair with the lowest merge id, and merges
    /// all of its non-overlapping occurrences; until no learned pair remains.
    pub fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<T> {
        let merges = self.model.merges();
        let mut tokens: Vec<T> = byte_tokens(bytes);

        while tokens.len() >= 2 {
            let Some((token, pair)) = tokens
                .windows(2)
                .filter_map(|w| {
                    let pair = (w[0], w[1]);
                    merges.lookup_pair(&pair).map(|token| (token, pair))
                })
                .min()
            else {
                break;
            };
            tokens = merge_pair(&tokens, pair, token);
        }
        tokens
    }

    /// The special tokens.
    pub fn specials(&self) -> &SpecialVocab<T> {
        self.model.specials()
    }
}

impl<T: TokenType> Tokenizer<T> for BasicTokenizer<T> {
    fn model(&self) -> &TokenizerModel<T> {
        &self.model
    }

    fn replace_model(
        &mut self,
        model: TokenizerModel<T>,
    ) -> BPResult<()> {
        self.splitter = SpecialSplitter::from_specials(model.specials())?;
        self.model = model;
        Ok(())
    }

    fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn train(
        &mut self,
        text: &str,
        options: &BpeTrainerOptions,
    ) -> BPResult<()> {
        let chunks = vec![byte_tokens::<T>(text.as_bytes())];
        let merges = train_merge_history(chunks, options, self.model.specials())?;

        let model = TokenizerModel::new(
            self.model.pattern(),
            self.model.specials().clone(),
            merges,
        )?;
        self.replace_model(model)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(text.len() / 2);
        for span in self.splitter.split(text) {
            match span {
                TextSpan::Normal(bytes) => tokens.extend(self.encode_bytes(bytes)),
                TextSpan::Special(token) => tokens.push(token),
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BytePairError;

    fn trained<T: TokenType>(
        text: &str,
        vocab_size: usize,
    ) -> BasicTokenizer<T> {
        let mut tokenizer = BasicTokenizer::<T>::new();
        tokenizer
            .train(text, &BpeTrainerOptions::new(vocab_size))
            .unwrap();
        tokenizer
    }

    #[test]
    fn test_train_reference_example() {
        type T = u32;
        let tokenizer = trained::<T>("aaabdaaabac", 256 + 3);

        let merges = tokenizer.model().merges();
        assert_eq!(merges.len(), 3);
        assert_eq!(merges.iter().next(), Some(((97, 97), 256)));
        assert_eq!(
            tokenizer.model().vocab().get(258),
            Some(b"aaab".as_slice())
        );

        let tokens = tokenizer.encode("aaabdaaabac");
        assert_eq!(tokens, vec![258, 100, 258, 97, 99]);
        assert_eq!(tokenizer.decode(&tokens).unwrap(), "aaabdaaabac");
    }

    #[test]
    fn test_train_rejects_small_vocab() {
        let mut tokenizer = BasicTokenizer::<u32>::new();
        let err = tokenizer
            .train("hello", &BpeTrainerOptions::new(100))
            .unwrap_err();
        assert!(matches!(err, BytePairError::VocabSizeTooSmall { size: 100 }));
        assert!(tokenizer.model().merges().is_empty());
    }

    #[test]
    fn test_train_short_text() {
        let tokenizer = trained::<u16>("x", 300);
        assert!(tokenizer.model().merges().is_empty());
        assert_eq!(tokenizer.model().vocab().len(), 256);
        assert_eq!(tokenizer.encode("xy"), vec![120, 121]);

        let tokenizer = trained::<u16>("", 300);
        assert!(tokenizer.encode("").is_empty());
    }

    #[test]
    fn test_roundtrip() {
        type T = u32;
        let text = "the cat sat on the mat; the cat ate the rat. caf\u{00e9} \u{4f60}\u{597d}";
        let tokenizer = trained::<T>(text, 300);

        for sample in [
            text,
            "the rat sat",
            "",
            "unseen words \u{1f600}",
            "caf\u{00e9}\u{00e9}",
        ] {
            let tokens = tokenizer.encode(sample);
            assert_eq!(tokenizer.decode(&tokens).unwrap(), sample);
        }

        assert!(tokenizer.encode(text).len() < text.len());
    }

    #[test]
    fn test_special_tokens() {
        type T = u32;
        let mut tokenizer = trained::<T>("hello hello hello", 260);
        tokenizer
            .register_special_tokens([("<|endoftext|>", 100257)])
            .unwrap();

        let text = "hello<|endoftext|>hello";
        let tokens = tokenizer.encode(text);
        assert!(tokens.contains(&100257));
        assert_eq!(
            tokens,
            [
                tokenizer.encode_ordinary("hello"),
                vec![100257],
                tokenizer.encode_ordinary("hello"),
            ]
            .concat()
        );
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);

        // Ordinary encoding does not see special tokens.
        let ordinary = tokenizer.encode_ordinary(text);
        assert!(!ordinary.contains(&100257));
        assert_eq!(tokenizer.decode(&ordinary).unwrap(), text);

        // Collides with a merge target.
        let err = tokenizer
            .register_special_tokens([("<|pad|>", 256)])
            .unwrap_err();
        assert!(err.is_configuration());

        // Retraining keeps special tokens, and keeps merge ids clear of them.
        let err = tokenizer
            .train("hello", &BpeTrainerOptions::new(100300))
            .unwrap_err();
        assert!(err.is_configuration());
        tokenizer
            .train("hello", &BpeTrainerOptions::new(258))
            .unwrap();
        assert_eq!(tokenizer.specials().lookup_token("<|endoftext|>"), Some(100257));
    }

    #[test]
    fn test_decode_errors_and_policy() {
        type T = u32;
        let tokenizer = trained::<T>("aaab", 258);

        let err = tokenizer.decode(&[97, 5000]).unwrap_err();
        assert!(matches!(err, BytePairError::UnknownTokenId { token: 5000 }));

        // "\u{00e9}" is [0xc3, 0xa9]; decode only the first byte.
        let tokenizer = tokenizer.with_decode_policy(DecodePolicy::Strict);
        assert_eq!(tokenizer.decode_policy(), DecodePolicy::Strict);
        assert!(matches!(
            tokenizer.decode(&[0xc3]),
            Err(BytePairError::Encoding(_))
        ));
        assert_eq!(
            tokenizer
                .decode_with_policy(&[0x61, 0xc3], DecodePolicy::Replace)
                .unwrap(),
            "a\u{fffd}"
        );
        assert_eq!(tokenizer.decode_to_bytes(&[0xc3, 0xa9]).unwrap(), vec![0xc3, 0xa9]);
    }

    #[test]
    fn test_with_pattern() {
        let tokenizer = BasicTokenizer::<u32>::new()
            .with_pattern(r"\p{L}+|\s+")
            .unwrap();
        assert_eq!(tokenizer.model().pattern(), r"\p{L}+|\s+");
        assert!(BasicTokenizer::<u32>::new().with_pattern("a\nb").is_err());
    }

    #[test]
    fn test_from_model() {
        type T = u32;
        let source = trained::<T>("abcabcabc", 260);
        let copy = BasicTokenizer::from_model(source.model().clone()).unwrap();
        assert_eq!(copy.encode("abcabc"), source.encode("abcabc"));
    }
}
