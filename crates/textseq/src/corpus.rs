//! # Corpus Reading
//!
//! A corpus is an ordered sequence of text lines; one sentence per line.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::TSResult;

/// Read every line of `reader`, with line terminators removed.
pub fn read_corpus<R: BufRead>(reader: R) -> TSResult<Vec<String>> {
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Read every line of the file at `path`.
pub fn read_corpus_path<P: AsRef<Path>>(path: P) -> TSResult<Vec<String>> {
    let path = path.as_ref();
    log::debug!("reading corpus: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_corpus(reader)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempdir::TempDir;

    use super::*;
    use crate::errors::TextSeqError;

    #[test]
    fn test_read_corpus() {
        let lines = read_corpus(Cursor::new("the cat sat\r\nthe dog ran fast\n\nend")).unwrap();
        assert_eq!(lines, vec!["the cat sat", "the dog ran fast", "", "end"]);
    }

    #[test]
    fn test_read_corpus_path() {
        let dir = TempDir::new("textseq").unwrap();
        let path = dir.path().join("corpus.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "hello world").unwrap();
            writeln!(file, "goodbye").unwrap();
        }

        assert_eq!(
            read_corpus_path(&path).unwrap(),
            vec!["hello world", "goodbye"]
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new("textseq").unwrap();
        let err = read_corpus_path(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, TextSeqError::Io(_)));
    }
}
