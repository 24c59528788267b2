//! # Vocabulary Training
//!
//! BPE training repeats three steps until the target vocab size is reached:
//! * count adjacent pairs ([`count_pairs_into`]),
//! * select the most frequent pair ([`MergeCandidate`]),
//! * replace every occurrence of it with a new token ([`merge_pair`]).
//!
//! The most frequent pair wins; ties go to the lowest ``(a, b)`` pair,
//! so training is reproducible across runs and hash seeds.
//!
//! ```rust
//! use bytepair::training::{BpeTrainerOptions, train_merge_history};
//! use bytepair::types::byte_tokens;
//! use bytepair::SpecialVocab;
//!
//! let chunks = vec![byte_tokens::<u32>(b"aaabdaaabac")];
//! let merges = train_merge_history(
//!     chunks,
//!     &BpeTrainerOptions::new(256 + 3),
//!     &SpecialVocab::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     merges.iter().collect::<Vec<_>>(),
//!     vec![((97, 97), 256), ((97, 98), 257), ((256, 257), 258)],
//! );
//! ```

mod bpe_trainer;
mod merge;
mod pair_stats;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainerOptions, MergeCandidate, train_merge_history};
#[doc(inline)]
pub use merge::merge_pair;
#[doc(inline)]
pub use pair_stats::{PairCountMap, count_pairs, count_pairs_into, select_best_pair};
