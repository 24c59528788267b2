//! # `bytepair` Byte-Pair-Encoding Tokenizer
//!
//! Learns a vocabulary of byte sequences from training text, and uses it
//! to convert text to and from sequences of integer token ids.
//!
//! See:
//! * [`training`] for pair statistics, the pair merger, and the training loop.
//! * [`vocab`] for the merge history, special tokens, and vocabulary reconstruction.
//! * [`tokenizer`] for the [`Tokenizer`] trait and [`BasicTokenizer`].
//! * [`io`] for the ``.model`` / ``.vocab`` file formats.
//! * [`decoders`] for the UTF-8 decode policy.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs. Enabled by default.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, but with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Training Example
//!
//! ```rust,no_run
//! use bytepair::{BasicTokenizer, BpeTrainerOptions, Tokenizer};
//!
//! fn example(text: &str) -> bytepair::BPResult<()> {
//!     let mut tokenizer: BasicTokenizer<u32> = BasicTokenizer::default();
//!     tokenizer.train(text, &BpeTrainerOptions::new(512).with_verbose(true))?;
//!
//!     let tokens = tokenizer.encode("hello world");
//!     assert_eq!(tokenizer.decode(&tokens)?, "hello world");
//!
//!     // Writes "toy.model" and "toy.vocab".
//!     tokenizer.save("toy")?;
//!
//!     let mut reloaded: BasicTokenizer<u32> = BasicTokenizer::default();
//!     reloaded.load("toy.model")?;
//!     Ok(())
//! }
//! ```

pub mod decoders;
pub mod errors;
pub mod io;
pub mod support;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::DecodePolicy;
#[doc(inline)]
pub use errors::{BPResult, BytePairError};
#[doc(inline)]
pub use tokenizer::{BasicTokenizer, Tokenizer, TokenizerModel};
#[doc(inline)]
pub use training::BpeTrainerOptions;
#[doc(inline)]
pub use types::{Pair, TokenType};
#[doc(inline)]
pub use vocab::{MergeHistory, SpecialVocab, Vocabulary};
