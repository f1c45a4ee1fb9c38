use crate::corpus::{Corpus, Document};
use crate::tokenizer::tokenize;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Load every `.txt` file under `dir` into a corpus.
///
/// Files are visited in sorted path order so corpus insertion order, which is
/// also the ranking tie-break, does not depend on directory enumeration
/// order. Documents are named by their path relative to `dir`; contents are
/// read with lossy UTF-8 conversion and tokenized with the crate tokenizer.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let name = path
            .strip_prefix(dir)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let tokens = tokenize(&text);
        corpus.insert(Document { name, text, tokens });
    }
    tracing::info!(docs = corpus.len(), dir = %dir.display(), "corpus loaded");
    Ok(corpus)
}
