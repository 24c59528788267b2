//! # Base64 Span List IO
//!
//! Lines are, in ascending token order:
//! ```terminaloutput
//! {BASE64 SPAN} {TOKEN}
//! ```
//!
//! Special tokens are not written; they are not part of the merged space.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{BPResult, BytePairError},
    tokenizer::TokenizerModel,
    types::{TokenType, WCHashSet},
};

/// Save the non-special spans of a model to a base64 vocab file.
pub fn save_base64_vocab_path<T: TokenType, P: AsRef<Path>>(
    model: &TokenizerModel<T>,
    path: P,
) -> BPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_vocab(model, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the non-special spans of a model to a [`Write`] writer.
///
/// ## Arguments
/// * `model` - the model to export.
/// * `writer` - the writer to target.
pub fn write_base64_vocab<T: TokenType, W: Write>(
    model: &TokenizerModel<T>,
    writer: &mut W,
) -> BPResult<()> {
    let special_tokens: WCHashSet<T> = model.specials().tokens().collect();
    for (token, span) in model.vocab().iter_sorted() {
        if special_tokens.contains(&token) {
            continue;
        }
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(span), token)?;
    }
    Ok(())
}

/// Load ``(span, token)`` entries from a base64 vocab file.
pub fn load_base64_vocab_path<T: TokenType, P: AsRef<Path>>(
    path: P,
) -> BPResult<Vec<(Vec<u8>, T)>> {
    let reader = BufReader::new(File::open(path)?);
    read_base64_vocab(reader)
}

/// Read ``(span, token)`` entries from a base64 vocab line reader.
///
/// ## Returns
/// The entries in file order; blank lines are skipped.
pub fn read_base64_vocab<T: TokenType, R: BufRead>(reader: R) -> BPResult<Vec<(Vec<u8>, T)>> {
    let mut entries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (b64, id) = line.split_once(' ').ok_or_else(|| {
            BytePairError::Format(format!("line {}: expected \"{{span}} {{id}}\"", idx + 1))
        })?;

        let span = BASE64_STANDARD
            .decode(b64)
            .map_err(|e| BytePairError::Format(format!("line {}: {e}", idx + 1)))?;

        let id: u64 = id.trim().parse().map_err(|e: core::num::ParseIntError| {
            BytePairError::Format(format!("line {}: {e}", idx + 1))
        })?;
        let token = T::from_u64(id).ok_or_else(|| {
            BytePairError::Format(format!("line {}: token id {id} is out of range", idx + 1))
        })?;

        entries.push((span, token));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{MergeHistory, SpecialVocab};

    #[test]
    fn test_base64_vocab() {
        type T = u32;
        let merges = MergeHistory::from_ordered_pairs([(104, 105)]).unwrap();
        let specials = SpecialVocab::from_words([("<|eot|>", 300)]).unwrap();
        let model: TokenizerModel<T> = TokenizerModel::new("", specials, merges).unwrap();

        let mut buf = Vec::new();
        write_base64_vocab(&model, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 257);
        assert_eq!(lines[0], "AA== 0");
        assert_eq!(lines[97], "YQ== 97");
        assert_eq!(lines[256], "aGk= 256");
        assert!(lines.iter().all(|line| !line.ends_with(" 300")));

        let entries: Vec<(Vec<u8>, T)> = read_base64_vocab(text.as_bytes()).unwrap();
        assert_eq!(entries.len(), 257);
        assert_eq!(entries[256], (b"hi".to_vec(), 256));
        for (token, span) in model.vocab().iter_sorted().take(257) {
            assert_eq!(entries[token as usize], (span.to_vec(), token));
        }
    }

    #[test]
    fn test_read_base64_malformed() {
        for text in ["YQ==", "!!! 97", "YQ== x", "YQ== 99999999999"] {
            let err = read_base64_vocab::<u16, _>(text.as_bytes()).unwrap_err();
            assert!(err.is_format(), "{text:?}");
        }
    }
}
