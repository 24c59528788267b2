//! # ``.vocab`` Dump
//!
//! Lines are, in ascending token order:
//! ```terminaloutput
//! [{SPAN}] {TOKEN}                    # byte and special tokens
//! {TOKEN A} {TOKEN B} -> [{SPAN}] {TOKEN}   # merges
//! ```
//!
//! Spans are rendered by [`render_token`]; the dump is for reading, not reloading.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    errors::BPResult,
    support::strings::render_token,
    tokenizer::TokenizerModel,
    types::TokenType,
};

/// Save a vocabulary dump to a file.
pub fn save_vocab_dump_path<T: TokenType, P: AsRef<Path>>(
    model: &TokenizerModel<T>,
    path: P,
) -> BPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_dump(model, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a vocabulary dump to a [`Write`] writer.
///
/// ## Arguments
/// * `model` - the model to dump.
/// * `writer` - the writer to target.
pub fn write_vocab_dump<T: TokenType, W: Write>(
    model: &TokenizerModel<T>,
    writer: &mut W,
) -> BPResult<()> {
    let vocab = model.vocab();
    for (token, span) in vocab.iter_sorted() {
        let rendered = render_token(span);
        match model.merges().lookup_token(&token) {
            Some((a, b)) => writeln!(writer, "{a} {b} -> [{rendered}] {token}")?,
            None => writeln!(writer, "[{rendered}] {token}")?,
        }
    }
    Ok(())
}
