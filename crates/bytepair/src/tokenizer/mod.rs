//! # Tokenizers
//!
//! [`Tokenizer`] is the shared capability set ``{train, encode, decode, save, load}``.
//! Each variant owns its [`TokenizerModel`] outright; nothing is shared between
//! instances.
//!
//! Variants:
//! * [`BasicTokenizer`] - BPE over the raw bytes of the whole text.

mod basic_tokenizer;
mod special_splitter;
mod tokenizer_model;
mod tokenizer_trait;

#[doc(inline)]
pub use basic_tokenizer::BasicTokenizer;
#[doc(inline)]
pub use special_splitter::{SpecialSplitter, TextSpan};
#[doc(inline)]
pub use tokenizer_model::TokenizerModel;
#[doc(inline)]
pub use tokenizer_trait::Tokenizer;
