//! # Tokenizer Persistence
//!
//! * ``{prefix}.model`` - the reloadable state; see [`write_model`].
//! * ``{prefix}.vocab`` - a human-readable vocabulary dump; never reloaded.
//! * base64 span lists, in the ``tiktoken`` style; see [`write_base64_vocab`].

mod base64_vocab;
mod model_io;
mod vocab_dump;

#[doc(inline)]
pub use base64_vocab::{
    load_base64_vocab_path,
    read_base64_vocab,
    save_base64_vocab_path,
    write_base64_vocab,
};
#[doc(inline)]
pub use model_io::{
    MODEL_SUFFIX,
    VOCAB_SUFFIX,
    load_model_path,
    read_model,
    save_model_files,
    save_model_path,
    write_model,
};
#[doc(inline)]
pub use vocab_dump::{save_vocab_dump_path, write_vocab_dump};
