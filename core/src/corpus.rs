use std::collections::HashMap;

/// A single corpus document: raw text kept for sentence extraction, the token
/// sequence for IDF and TF-IDF scoring.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
    pub tokens: Vec<String>,
}

/// Insertion-ordered document collection with by-name lookup.
///
/// Iteration order is load order, which doubles as the documented tie-break
/// for documents with equal scores. Inserting a duplicate name replaces the
/// existing entry in place without disturbing its position.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    by_name: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc: Document) {
        match self.by_name.get(&doc.name) {
            Some(&i) => self.docs[i] = doc,
            None => {
                self.by_name.insert(doc.name.clone(), self.docs.len());
                self.docs.push(doc);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.by_name.get(name).map(|&i| &self.docs[i])
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }
}

/// A query: a set of words. Duplicates and order in the source text do not
/// affect ranking. Words are held sorted and deduplicated so that iteration
/// order, and therefore floating-point summation order, is identical for
/// identical queries.
#[derive(Debug, Clone, Default)]
pub struct Query {
    words: Vec<String>,
}

impl Query {
    /// Build a query from free text with the crate tokenizer.
    pub fn parse(text: &str) -> Self {
        Self::from_words(crate::tokenizer::tokenize(text))
    }

    pub fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Insertion-ordered map of sentence text to its token sequence.
///
/// Duplicate sentence text collapses to a single entry. Tokenization is
/// deterministic for identical text, so the replacement carries the same
/// token sequence and the first occurrence keeps its position.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    entries: Vec<(String, Vec<String>)>,
    by_text: HashMap<String, usize>,
}

impl SentenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, text: String, tokens: Vec<String>) {
        match self.by_text.get(&text) {
            Some(&i) => self.entries[i].1 = tokens,
            None => {
                self.by_text.insert(text.clone(), self.entries.len());
                self.entries.push((text, tokens));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(text, tokens)| (text.as_str(), tokens.as_slice()))
    }
}
