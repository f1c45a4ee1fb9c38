use crate::corpus::{Corpus, Query};
use crate::error::Error;
use crate::extract::extract_sentences;
use crate::idf::IdfTable;
use crate::rank::{top_documents, top_sentences};
use crate::{segment, tokenizer};

/// Answer a query against a corpus.
///
/// Ranks documents by TF-IDF, extracts candidate sentences from the top
/// `file_matches` documents, then ranks those by summed query-term IDF with a
/// density tie-break, returning up to `sentence_matches` sentences. Two IDF
/// tables are built per call, one over the corpus and one over the extracted
/// sentences; nothing is cached or shared across calls.
///
/// An empty corpus is [`Error::EmptyCorpus`]. Selected documents that yield
/// no candidate sentences (all stopword text, say) produce an empty result
/// rather than an error.
pub fn answer(
    query: &Query,
    corpus: &Corpus,
    file_matches: usize,
    sentence_matches: usize,
) -> Result<Vec<String>, Error> {
    let file_idfs = IdfTable::compute(corpus.iter().map(|d| d.tokens.as_slice()))?;
    let selected = top_documents(query, corpus, &file_idfs, file_matches);
    tracing::debug!(files = selected.len(), "ranked documents");

    let sentences = extract_sentences(&selected, corpus, segment::split_sentences, tokenizer::tokenize);
    if sentences.is_empty() {
        return Ok(Vec::new());
    }
    tracing::debug!(candidates = sentences.len(), "extracted sentences");

    let sentence_idfs = IdfTable::compute(sentences.iter().map(|(_, tokens)| tokens))?;
    top_sentences(query, &sentences, &sentence_idfs, sentence_matches)
}
