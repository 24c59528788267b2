//! # Ordered Merge History ``{ (T, T) -> T }``

use crate::{
    errors::{BPResult, BytePairError},
    types::{Pair, TokenType, U8_SIZE},
    vocab::{PairTokenMap, TokenPairMap},
};

/// The ordered record of learned merges.
///
/// Entries are kept in creation order; a merge may only reference
/// byte tokens or the targets of earlier merges.
#[derive(Debug, Clone, Default)]
pub struct MergeHistory<T: TokenType> {
    /// ``[((a, b), t)]`` in creation order.
    merges: Vec<(Pair<T>, T)>,

    /// Lookup of ``(a, b) -> t``.
    pair_tokens: PairTokenMap<T>,

    /// Lookup of ``t -> (a, b)``.
    token_pairs: TokenPairMap<T>,
}

impl<T: TokenType> PartialEq for MergeHistory<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.merges == other.merges
    }
}

impl<T: TokenType> MergeHistory<T> {
    /// Create an empty history with room for `capacity` merges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            merges: Vec::with_capacity(capacity),
            pair_tokens: PairTokenMap::default(),
            token_pairs: TokenPairMap::default(),
        }
    }

    /// Rebuild a history from pairs listed in creation order.
    ///
    /// The merge ids are implicit: the i-th pair becomes token ``256 + i``.
    ///
    /// ## Arguments
    /// * `pairs` - the merged pairs, in creation order.
    ///
    /// ## Returns
    /// A `Result` containing the history, or an error if a pair
    /// references an unknown token or a token id overflows `T`.
    pub fn from_ordered_pairs<I>(pairs: I) -> BPResult<Self>
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let mut history = Self::default();
        for (idx, pair) in pairs.into_iter().enumerate() {
            let token = T::from_usize(U8_SIZE + idx).ok_or(BytePairError::VocabSizeOverflow {
                size: U8_SIZE + idx + 1,
            })?;
            history.push(pair, token)?;
        }
        Ok(history)
    }

    /// The number of merges.
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Is the history empty?
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Is this token known: a byte token, or a merge target?
    pub fn is_known_token(
        &self,
        token: T,
    ) -> bool {
        token.to_usize().is_some_and(|t| t < U8_SIZE) || self.token_pairs.contains_key(&token)
    }

    /// Append a merge.
    ///
    /// ## Arguments
    /// * `pair` - the merged pair; both parents must already be known.
    /// * `token` - the new token; must not be a byte token or a known target.
    pub fn push(
        &mut self,
        pair: Pair<T>,
        token: T,
    ) -> BPResult<()> {
        for parent in [pair.0, pair.1] {
            if !self.is_known_token(parent) {
                return Err(BytePairError::Format(format!(
                    "merge ({}, {}) -> {} references undefined token {}",
                    pair.0, pair.1, token, parent
                )));
            }
        }
        if self.is_known_token(token) {
            return Err(BytePairError::Format(format!(
                "merge ({}, {}) -> {} reuses an existing token",
                pair.0, pair.1, token
            )));
        }
        if let Some(prev) = self.pair_tokens.get(&pair) {
            return Err(BytePairError::Format(format!(
                "pair ({}, {}) is already merged into {}",
                pair.0, pair.1, prev
            )));
        }

        self.merges.push((pair, token));
        self.pair_tokens.insert(pair, token);
        self.token_pairs.insert(token, pair);
        Ok(())
    }

    /// Iterate over ``((a, b), t)`` in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair<T>, T)> + '_ {
        self.merges.iter().copied()
    }

    /// Iterate over the merged pairs in creation order.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<T>> + '_ {
        self.merges.iter().map(|&(pair, _)| pair)
    }

    /// Looks up the token a pair merges into.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_tokens.get(pair).copied()
    }

    /// Looks up the pair a token was merged from.
    pub fn lookup_token(
        &self,
        token: &T,
    ) -> Option<Pair<T>> {
        self.token_pairs.get(token).copied()
    }

    /// The largest merge target, if any.
    pub fn max_token(&self) -> Option<T> {
        self.merges.iter().map(|&(_, t)| t).max()
    }
}
