use crate::corpus::{Corpus, SentenceSet};

/// Collect candidate sentences from the selected documents.
///
/// Each document's raw text is split into paragraphs on line boundaries, each
/// paragraph into sentences by `segment`, and each sentence into tokens by
/// `tokenize`. Sentences that tokenize to nothing (all stopwords or
/// punctuation) are dropped, which is what lets the sentence ranker divide by
/// token count. Duplicate sentence text collapses per [`SentenceSet`]
/// semantics. Selected names missing from the corpus are skipped.
///
/// Pure aggregation: a fresh set is built on every call.
pub fn extract_sentences<S, T>(
    selected: &[String],
    corpus: &Corpus,
    segment: S,
    tokenize: T,
) -> SentenceSet
where
    S: Fn(&str) -> Vec<String>,
    T: Fn(&str) -> Vec<String>,
{
    let mut sentences = SentenceSet::new();
    for name in selected {
        let Some(doc) = corpus.get(name) else { continue };
        for paragraph in doc.text.lines() {
            for sentence in segment(paragraph) {
                let tokens = tokenize(&sentence);
                if tokens.is_empty() {
                    continue;
                }
                sentences.insert(sentence, tokens);
            }
        }
    }
    sentences
}
