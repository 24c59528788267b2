//! # BPE Trainer

use core::cmp::{Ordering, Reverse};

use crate::{
    errors::{BPResult, BytePairError},
    training::{PairCountMap, count_pairs_into, merge_pair, select_best_pair},
    types::{Pair, TokenType, U8_SIZE},
    vocab::{MergeHistory, SpecialVocab, validators::try_vocab_size},
};

/// Options for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeTrainerOptions {
    /// The target vocab size, including the 256 byte tokens.
    pub vocab_size: usize,

    /// Log every merge at ``info`` level.
    pub verbose: bool,
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BpeTrainerOptions` instance.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            verbose: false,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; must be >= 256 (the size of the u8 space).
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets per-merge logging.
    pub fn with_verbose(
        self,
        verbose: bool,
    ) -> Self {
        Self { verbose, ..self }
    }

    /// The number of merges to compute.
    pub fn num_merges(&self) -> usize {
        self.vocab_size.saturating_sub(U8_SIZE)
    }
}

/// A [`Pair`] selected for merging, with its occurrence count.
///
/// Orders by count, then by *descending* pair; so the max candidate
/// is the most frequent pair, and among equals, the lowest pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate<T: TokenType> {
    /// The pair to merge.
    pub pair: Pair<T>,

    /// The number of occurrences of the pair.
    pub count: usize,
}

impl<T: TokenType> MergeCandidate<T> {
    /// The selection key.
    pub fn selection_key(&self) -> (usize, Reverse<Pair<T>>) {
        (self.count, Reverse(self.pair))
    }
}

impl<T: TokenType> PartialOrd for MergeCandidate<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TokenType> Ord for MergeCandidate<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.selection_key().cmp(&other.selection_key())
    }
}

/// Learn a merge history from token chunks.
///
/// Each round recounts all pairs, merges the best one everywhere, and
/// assigns it the next id (``256 + round``). Training stops early, without
/// error, once no chunk has a pair left.
///
/// ## Arguments
/// * `chunks` - independent token sequences; pairs never span chunks.
/// * `options` - the trainer options.
/// * `specials` - reserved ids; none may fall in the merge id range.
///
/// ## Returns
/// A `Result` containing the learned merges.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(chunks, specials)))]
pub fn train_merge_history<T: TokenType>(
    mut chunks: Vec<Vec<T>>,
    options: &BpeTrainerOptions,
    specials: &SpecialVocab<T>,
) -> BPResult<MergeHistory<T>> {
    let vocab_size = try_vocab_size::<T>(options.vocab_size)?;
    if let Some(token) = specials.first_token_in(U8_SIZE as u64, vocab_size as u64) {
        return Err(BytePairError::Configuration(format!(
            "special token id {token} collides with merge ids {U8_SIZE}..{vocab_size}"
        )));
    }

    let num_merges = options.num_merges();
    log::info!("Starting BPE training: {num_merges} merges to compute");

    let mut merges = MergeHistory::with_capacity(num_merges);

    for merge_idx in 0..num_merges {
        let mut pair_counts: PairCountMap<T> = PairCountMap::default();
        for chunk in &chunks {
            count_pairs_into(chunk, &mut pair_counts);
        }

        let Some(best) = select_best_pair(&pair_counts) else {
            log::info!("No pairs left to merge; stopping after {merge_idx} merges");
            break;
        };

        let token = T::from_usize(U8_SIZE + merge_idx)
            .ok_or(BytePairError::VocabSizeOverflow { size: vocab_size })?;

        for chunk in chunks.iter_mut() {
            if chunk.len() >= 2 {
                *chunk = merge_pair(chunk, best.pair, token);
            }
        }
        merges.push(best.pair, token)?;

        if options.verbose {
            log::info!(
                "merge {}/{}: {:?} -> {} had {} occurrences",
                merge_idx + 1,
                num_merges,
                best.pair,
                token,
                best.count
            );
        } else {
            log::debug!("merge {:?} -> {} ({})", best.pair, token, best.count);
        }
    }

    log::info!("Finished training: {} merges completed", merges.len());
    Ok(merges)
}
