//! # Adjacent Pair Statistics

use crate::{
    training::MergeCandidate,
    types::{Pair, TokenType, WCHashMap},
};

/// A map from [`Pair`] to its occurrence count.
pub type PairCountMap<T> = WCHashMap<Pair<T>, usize>;

/// Count every adjacent pair in `tokens`.
///
/// Overlapping windows are all counted: ``[5, 5, 5]`` has two ``(5, 5)``.
pub fn count_pairs<T: TokenType>(tokens: &[T]) -> PairCountMap<T> {
    let mut counts = PairCountMap::default();
    count_pairs_into(tokens, &mut counts);
    counts
}

/// Accumulate the adjacent pair counts of `tokens` into `counts`.
///
/// Used to count across independent chunks; pairs never span chunks.
pub fn count_pairs_into<T: TokenType>(
    tokens: &[T],
    counts: &mut PairCountMap<T>,
) {
    for w in tokens.windows(2) {
        *counts.entry((w[0], w[1])).or_default() += 1;
    }
}

/// Select the most frequent pair; ties go to the lowest pair.
///
/// ## Returns
/// `None` when no pair has a positive count.
pub fn select_best_pair<T: TokenType>(counts: &PairCountMap<T>) -> Option<MergeCandidate<T>> {
    counts
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(&pair, &count)| MergeCandidate { pair, count })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pairs() {
        type T = u32;

        let counts = count_pairs::<T>(&[5, 5, 5]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&(5, 5)], 2);

        assert!(count_pairs::<T>(&[]).is_empty());
        assert!(count_pairs::<T>(&[7]).is_empty());

        let counts = count_pairs::<T>(&[1, 2, 3, 1, 2]);
        assert_eq!(counts[&(1, 2)], 2);
        assert_eq!(counts[&(2, 3)], 1);
        assert_eq!(counts[&(3, 1)], 1);
    }

    #[test]
    fn test_count_pairs_into_accumulates() {
        type T = u16;

        let mut counts = PairCountMap::default();
        count_pairs_into::<T>(&[1, 2], &mut counts);
        count_pairs_into::<T>(&[2, 1, 2], &mut counts);

        assert_eq!(counts[&(1, 2)], 2);
        assert_eq!(counts[&(2, 1)], 1);
        // No pair spans the chunk boundary.
        assert_eq!(counts.get(&(2, 2)), None);
    }

    #[test]
    fn test_select_best_pair() {
        type T = u32;

        assert_eq!(select_best_pair::<T>(&PairCountMap::default()), None);

        let mut counts: PairCountMap<T> = PairCountMap::default();
        counts.insert((9, 9), 3);
        counts.insert((4, 1), 3);
        counts.insert((4, 0), 3);
        counts.insert((1, 1), 2);
        counts.insert((0, 0), 0);

        let best = select_best_pair(&counts).unwrap();
        assert_eq!(best.pair, (4, 0));
        assert_eq!(best.count, 3);

        counts.insert((1, 1), 4);
        assert_eq!(select_best_pair(&counts).unwrap().pair, (1, 1));
    }
}
