//! # Vocabulary
//!
//! Token id assignments are split across three tables:
//! * [`MergeHistory`] - the ordered ``{ (T, T) -> T }`` merges learned in training.
//! * [`SpecialVocab`] - the ``{ String -> T }`` special tokens.
//! * [`Vocabulary`] - the derived ``{ T -> Vec<u8> }`` byte spans of every id.
//!
//! Ids ``0..=255`` are always the identity byte tokens.

pub mod merge_history;
pub mod special_vocab;
pub mod validators;
pub mod vocab_types;
pub mod vocabulary;

#[doc(inline)]
pub use merge_history::MergeHistory;
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use vocab_types::{PairTokenMap, TokenPairMap, TokenSpanMap};
#[doc(inline)]
pub use vocabulary::Vocabulary;
