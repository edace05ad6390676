//! # Vocabulary IO
//!
//! Vocabularies are stored as a flat JSON object: ``{"token": id, ...}``.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    dataset::expand_path,
    errors::{SSResult, SamplerError},
    types::TokenType,
    vocab::{QaVocab, TokenMap},
};

/// Read a vocabulary from a JSON reader.
///
/// ## Errors
/// * JSON parse errors;
/// * [`SamplerError::TokenOutOfRange`] if an id does not fit `T`;
/// * [`SamplerError::MissingReservedToken`] if a reserved marker is absent.
pub fn read_vocab_json<T, R>(reader: R) -> SSResult<QaVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let raw: HashMap<String, u64> = serde_json::from_reader(reader)?;

    let token_map = raw
        .into_iter()
        .map(|(word, id)| {
            T::from_u64(id)
                .map(|token| (word, token))
                .ok_or(SamplerError::TokenOutOfRange { id })
        })
        .collect::<SSResult<TokenMap<T>>>()?;

    QaVocab::from_map(token_map)
}

/// Load a vocabulary from a JSON file.
///
/// The path is shell-expanded (``~``, ``$VAR``).
pub fn load_vocab_path<T, P>(path: P) -> SSResult<QaVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = expand_path(path)?;
    log::debug!("loading vocab: {}", path.display());

    let reader = BufReader::new(File::open(&path)?);
    read_vocab_json(reader)
}

/// Token map entries, serialized as one JSON object in id order.
struct IdOrderedEntries<'a>(Vec<(&'a str, u64)>);

impl serde::Serialize for IdOrderedEntries<'_> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.0.iter().copied())
    }
}

/// Write a vocabulary as JSON, entries ordered by id.
pub fn write_vocab_json<T, W>(
    vocab: &QaVocab<T>,
    writer: &mut W,
) -> SSResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut entries: Vec<(&str, u64)> = vocab
        .token_map()
        .iter()
        .map(|(word, token)| (word.as_str(), token.to_u64().unwrap_or(u64::MAX)))
        .collect();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    serde_json::to_writer_pretty(&mut *writer, &IdOrderedEntries(entries))?;
    writeln!(writer)?;
    Ok(())
}

/// Save a vocabulary to a JSON file.
pub fn save_vocab_path<T, P>(
    vocab: &QaVocab<T>,
    path: P,
) -> SSResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = expand_path(path)?;
    log::debug!("saving vocab: {}", path.display());

    let mut writer = BufWriter::new(File::create(&path)?);
    write_vocab_json(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempdir::TempDir;

    use super::*;
    use crate::vocab::UNK_TOKEN;

    #[test]
    fn test_read_vocab_json() {
        let json = r#"{"<UNK>": 0, "<S>": 1, "</S>": 2, "cat": 3}"#;
        let vocab: QaVocab<u32> = read_vocab_json(Cursor::new(json)).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.lookup_token("cat"), 3);
        assert_eq!(vocab.lookup_token("dog"), 0);
    }

    #[test]
    fn test_read_vocab_json_errors() {
        let missing = r#"{"<UNK>": 0, "<S>": 1}"#;
        assert!(matches!(
            read_vocab_json::<u32, _>(Cursor::new(missing)),
            Err(SamplerError::MissingReservedToken { .. })
        ));

        let overflow = r#"{"<UNK>": 0, "<S>": 1, "</S>": 2, "x": 70000}"#;
        assert!(matches!(
            read_vocab_json::<u16, _>(Cursor::new(overflow)),
            Err(SamplerError::TokenOutOfRange { id: 70000 })
        ));

        assert!(matches!(
            read_vocab_json::<u32, _>(Cursor::new("[1, 2]")),
            Err(SamplerError::Json(_))
        ));
    }

    #[test]
    fn test_write_vocab_json() {
        let vocab: QaVocab<u32> = QaVocab::from_words(["zeta", "\"q\"", "alpha"]).unwrap();

        let mut buf = Vec::new();
        write_vocab_json(&vocab, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            concat!(
                "{\n",
                "  \"<UNK>\": 0,\n",
                "  \"<S>\": 1,\n",
                "  \"</S>\": 2,\n",
                "  \"zeta\": 3,\n",
                "  \"\\\"q\\\"\": 4,\n",
                "  \"alpha\": 5\n",
                "}\n",
            )
        );

        let reread: QaVocab<u32> = read_vocab_json(Cursor::new(text)).unwrap();
        assert_eq!(reread, vocab);
    }

    #[test]
    fn test_save_load_path() {
        let tmp = TempDir::new("squadsampler_vocab").unwrap();
        let path = tmp.path().join("vocab.json");

        let vocab: QaVocab<u32> = QaVocab::from_words(["the", "cat"]).unwrap();
        save_vocab_path(&vocab, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.find(UNK_TOKEN).unwrap() < text.find("cat").unwrap());

        let loaded: QaVocab<u32> = load_vocab_path(&path).unwrap();
        assert_eq!(loaded, vocab);
    }
}
