//! # ``.model`` File IO
//!
//! Lines are:
//! ```terminaloutput
//! {PATTERN}
//! {N}
//! {SPECIAL WORD} {TOKEN}    # N lines, ascending token order
//! {A} {B}                   # one per merge, in creation order
//! ```
//!
//! Merge ids are not stored; the i-th merge line is token ``256 + i``.

use std::{
    ffi::OsString,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    errors::{BPResult, BytePairError},
    io::save_vocab_dump_path,
    tokenizer::TokenizerModel,
    types::{Pair, TokenType, U8_SIZE},
    vocab::{MergeHistory, SpecialVocab},
};

/// The suffix of reloadable model files.
pub const MODEL_SUFFIX: &str = ".model";

/// The suffix of human-readable vocabulary dumps.
pub const VOCAB_SUFFIX: &str = ".vocab";

fn with_suffix(
    prefix: &Path,
    suffix: &str,
) -> PathBuf {
    let mut path: OsString = prefix.as_os_str().to_owned();
    path.push(suffix);
    path.into()
}

/// Save ``{prefix}.model`` and ``{prefix}.vocab``.
///
/// ## Arguments
/// * `model` - the model to save.
/// * `file_prefix` - the path prefix; the suffixes are appended.
pub fn save_model_files<T: TokenType, P: AsRef<Path>>(
    model: &TokenizerModel<T>,
    file_prefix: P,
) -> BPResult<()> {
    let prefix = file_prefix.as_ref();
    save_model_path(model, with_suffix(prefix, MODEL_SUFFIX))?;
    save_vocab_dump_path(model, with_suffix(prefix, VOCAB_SUFFIX))
}

/// Save a model to a ``.model`` file.
pub fn save_model_path<T: TokenType, P: AsRef<Path>>(
    model: &TokenizerModel<T>,
    path: P,
) -> BPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_model(model, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a model to a [`Write`] writer.
///
/// ## Arguments
/// * `model` - the model to write.
/// * `writer` - the writer to target.
///
/// ## Returns
/// An error if the merge ids are not sequential from 256; the format
/// cannot represent them.
pub fn write_model<T: TokenType, W: Write>(
    model: &TokenizerModel<T>,
    writer: &mut W,
) -> BPResult<()> {
    writeln!(writer, "{}", model.pattern())?;

    let specials = model.specials().sorted_entries();
    writeln!(writer, "{}", specials.len())?;
    for (word, token) in specials {
        writeln!(writer, "{word} {token}")?;
    }

    for (idx, ((a, b), token)) in model.merges().iter().enumerate() {
        if token.to_usize() != Some(U8_SIZE + idx) {
            return Err(BytePairError::Format(format!(
                "merge {idx} has id {token}, expected {}",
                U8_SIZE + idx
            )));
        }
        writeln!(writer, "{a} {b}")?;
    }

    Ok(())
}

/// Load a model from a ``.model`` file.
///
/// The path must end in ``.model``; this is checked before the file is opened.
pub fn load_model_path<T: TokenType, P: AsRef<Path>>(path: P) -> BPResult<TokenizerModel<T>> {
    let path = path.as_ref();
    if !path.to_string_lossy().ends_with(MODEL_SUFFIX) {
        return Err(BytePairError::Format(format!(
            "{} does not end in {MODEL_SUFFIX}",
            path.display()
        )));
    }

    let reader = BufReader::new(File::open(path)?);
    read_model(reader)
}

fn parse_token<T: TokenType>(
    field: &str,
    line_no: usize,
) -> BPResult<T> {
    let id: u64 = field.trim().parse().map_err(|e: core::num::ParseIntError| {
        BytePairError::Format(format!("line {line_no}: bad token id {field:?}: {e}"))
    })?;
    T::from_u64(id).ok_or_else(|| {
        BytePairError::Format(format!("line {line_no}: token id {id} is out of range"))
    })
}

fn check_line(
    line: std::io::Result<String>,
    line_no: usize,
) -> BPResult<String> {
    line.map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            BytePairError::Format(format!("line {line_no}: invalid utf-8"))
        }
        _ => e.into(),
    })
}

fn next_line<I>(
    lines: &mut I,
    line_no: usize,
    what: &str,
) -> BPResult<String>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    match lines.next() {
        Some(line) => check_line(line, line_no),
        None => Err(BytePairError::Format(format!(
            "line {line_no}: unexpected end of file, expected {what}"
        ))),
    }
}

/// Read a model from a [`BufRead`] line reader.
///
/// Blank merge lines are skipped. All validation failures, including
/// special token ids which collide with merge ids, are format errors.
pub fn read_model<T: TokenType, R: BufRead>(reader: R) -> BPResult<TokenizerModel<T>> {
    let mut lines = reader.lines();

    let pattern = next_line(&mut lines, 1, "the pattern")?;

    let count_line = next_line(&mut lines, 2, "the special token count")?;
    let count: usize = count_line.trim().parse().map_err(|e: core::num::ParseIntError| {
        BytePairError::Format(format!("line 2: bad special token count {count_line:?}: {e}"))
    })?;

    let mut specials = SpecialVocab::default();
    for idx in 0..count {
        let line_no = 3 + idx;
        let line = next_line(&mut lines, line_no, "a special token")?;
        let (word, id) = line.rsplit_once(' ').ok_or_else(|| {
            BytePairError::Format(format!("line {line_no}: expected \"{{word}} {{id}}\""))
        })?;
        let token = parse_token(id, line_no)?;
        specials
            .add_str_word(word, token)
            .map_err(|e| BytePairError::Format(format!("line {line_no}: {e}")))?;
    }

    let mut pairs: Vec<Pair<T>> = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line_no = 3 + count + idx;
        let line = check_line(line, line_no)?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(BytePairError::Format(format!(
                "line {line_no}: expected \"{{a}} {{b}}\", found {line:?}"
            )));
        };
        pairs.push((parse_token(a, line_no)?, parse_token(b, line_no)?));
    }

    let merges = MergeHistory::from_ordered_pairs(pairs)
        .map_err(|e| BytePairError::Format(e.to_string()))?;

    log::debug!(
        "read model: {} special tokens, {} merges",
        specials.len(),
        merges.len()
    );

    TokenizerModel::new(pattern, specials, merges).map_err(|e| BytePairError::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> TokenizerModel<u32> {
        let merges = MergeHistory::from_ordered_pairs([(97, 97), (97, 98), (256, 257)]).unwrap();
        let specials =
            SpecialVocab::from_words([("<|fim prefix|>", 1001), ("<|endoftext|>", 1000)]).unwrap();
        TokenizerModel::new(r"'s|\p{L}+| ?\d+", specials, merges).unwrap()
    }

    #[test]
    fn test_write_model() {
        let mut buf = Vec::new();
        write_model(&sample_model(), &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            [
                r"'s|\p{L}+| ?\d+",
                "2",
                "<|endoftext|> 1000",
                "<|fim prefix|> 1001",
                "97 97",
                "97 98",
                "256 257",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_read_written_model() {
        let model = sample_model();
        let mut buf = Vec::new();
        write_model(&model, &mut buf).unwrap();

        let loaded: TokenizerModel<u32> = read_model(buf.as_slice()).unwrap();
        assert_eq!(loaded, model);
        assert_eq!(loaded.vocab().get(258), Some(b"aaab".as_slice()));
    }

    #[test]
    fn test_read_empty_model() {
        let model: TokenizerModel<u16> = read_model("\n0\n".as_bytes()).unwrap();
        assert_eq!(model, TokenizerModel::default());

        let model: TokenizerModel<u16> = read_model("\n0\n97 98\n\n".as_bytes()).unwrap();
        assert_eq!(model.merges().len(), 1);
    }

    #[test]
    fn test_read_malformed() {
        for text in [
            "",
            "pattern",
            "pattern\nxx\n",
            "pattern\n2\n<|a|> 300\n",
            "pattern\n1\n<|a|>\n",
            "pattern\n1\n<|a|> abc\n",
            "pattern\n0\n97\n",
            "pattern\n0\n97 98 99\n",
            "pattern\n0\n97 x\n",
            // Forward reference.
            "pattern\n0\n97 257\n",
            // Special id is also a merge target.
            "pattern\n1\n<|a|> 256\n97 98\n",
            // Special id inside the byte range.
            "pattern\n1\n<|a|> 65\n",
        ] {
            let err = read_model::<u32, _>(text.as_bytes()).unwrap_err();
            assert!(err.is_format(), "{text:?}: {err}");
        }

        // Not utf-8; in the pattern, and in a merge line.
        for bytes in [b"\xff\n0\n".as_slice(), b"\n0\n97 98\n\xfe\xff\n".as_slice()] {
            let err = read_model::<u32, _>(bytes).unwrap_err();
            assert!(err.is_format(), "{bytes:?}: {err}");
        }

        // Out of range for the token type.
        let err = read_model::<u8, _>("\n0\n97 98\n".as_bytes()).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_load_requires_suffix() {
        let err = load_model_path::<u32, _>("no/such/dir/toy.vocab").unwrap_err();
        assert!(err.is_format());

        let err = load_model_path::<u32, _>("no/such/dir/toy.model").unwrap_err();
        assert!(matches!(err, BytePairError::Io(_)));
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(
            with_suffix(Path::new("out/toy"), MODEL_SUFFIX),
            PathBuf::from("out/toy.model")
        );
        assert_eq!(
            with_suffix(Path::new("toy.v1"), VOCAB_SUFFIX),
            PathBuf::from("toy.v1.vocab")
        );
    }
}
