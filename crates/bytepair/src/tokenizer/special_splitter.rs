//! # Special Token Splitter

use aho_corasick::{AhoCorasick, MatchKind};

use crate::{
    errors::{BPResult, BytePairError},
    types::TokenType,
    vocab::SpecialVocab,
};

/// A span of text, split around special tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpan<'a, T: TokenType> {
    /// Ordinary bytes, to be byte-pair encoded.
    Normal(&'a [u8]),

    /// A special token literal, already resolved to its token.
    Special(T),
}

/// Splits text at special token literals.
///
/// Overlapping literals resolve leftmost-first, then longest.
#[derive(Debug, Clone)]
pub struct SpecialSplitter<T: TokenType> {
    matcher: Option<AhoCorasick>,

    /// ``tokens[pattern_id]`` for each matcher pattern.
    tokens: Vec<T>,
}

impl<T: TokenType> Default for SpecialSplitter<T> {
    fn default() -> Self {
        Self {
            matcher: None,
            tokens: Vec::new(),
        }
    }
}

impl<T: TokenType> SpecialSplitter<T> {
    /// Build a splitter for the words of a [`SpecialVocab`].
    pub fn from_specials(specials: &SpecialVocab<T>) -> BPResult<Self> {
        if specials.is_empty() {
            return Ok(Self::default());
        }

        let entries = specials.sorted_entries();
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(entries.iter().map(|&(word, _)| word))
            .map_err(|e| BytePairError::Configuration(e.to_string()))?;

        Ok(Self {
            matcher: Some(matcher),
            tokens: entries.into_iter().map(|(_, t)| t).collect(),
        })
    }

    /// Split `text` into normal and special spans, in order.
    ///
    /// Empty normal spans are omitted.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<TextSpan<'a, T>> {
        let bytes = text.as_bytes();
        let Some(matcher) = &self.matcher else {
            return if bytes.is_empty() {
                Vec::new()
            } else {
                vec![TextSpan::Normal(bytes)]
            };
        };

        let mut spans = Vec::new();
        let mut last = 0;
        for m in matcher.find_iter(bytes) {
            if m.start() > last {
                spans.push(TextSpan::Normal(&bytes[last..m.start()]));
            }
            spans.push(TextSpan::Special(self.tokens[m.pattern().as_usize()]));
            last = m.end();
        }
        if last < bytes.len() {
            spans.push(TextSpan::Normal(&bytes[last..]));
        }
        spans
    }
}
