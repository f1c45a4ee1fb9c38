use crate::corpus::{Corpus, Query, SentenceSet};
use crate::error::Error;
use crate::idf::IdfTable;
use std::cmp::Ordering;

/// Rank corpus documents by summed TF-IDF against the query and return the
/// names of the top `n`.
///
/// Each query word present in the IDF table contributes its occurrence count
/// in the document times its IDF; query words the corpus never saw contribute
/// zero. The sort is stable and descending, so equal scores keep corpus
/// insertion order. An `n` larger than the corpus returns every document.
pub fn top_documents(query: &Query, corpus: &Corpus, idfs: &IdfTable, n: usize) -> Vec<String> {
    let mut scored: Vec<(&str, f32)> = corpus
        .iter()
        .map(|doc| {
            let mut score = 0.0f32;
            for word in query.words() {
                if let Some(idf) = idfs.get(word) {
                    let tf = doc.tokens.iter().filter(|t| t.as_str() == word).count();
                    score += tf as f32 * idf;
                }
            }
            (doc.name.as_str(), score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.into_iter().take(n).map(|(name, _)| name.to_string()).collect()
}

/// Composite sentence rank: summed query-term IDF first, query term density
/// as the tie-break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    pub idf_score: f32,
    pub density: f32,
}

/// Rank candidate sentences against the query and return the text of the top
/// `n`.
///
/// A sentence's `idf_score` sums the IDF of every query word present in both
/// the sentence and the table, counted once per word regardless of repeats
/// (unlike document ranking, which weights by occurrence count). Ties fall to
/// `density`: the fraction of the sentence's tokens matched by distinct query
/// words. The sort is stable, so full ties keep sentence insertion order.
///
/// Returns [`Error::EmptySentence`] if any sentence arrives with no tokens;
/// the extractor guarantees this never happens on the normal path.
pub fn top_sentences(
    query: &Query,
    sentences: &SentenceSet,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, Error> {
    let mut scored: Vec<(&str, SentenceScore)> = Vec::with_capacity(sentences.len());
    for (text, tokens) in sentences.iter() {
        scored.push((text, score_sentence(query, text, tokens, idfs)?));
    }
    scored.sort_by(|a, b| {
        b.1.idf_score
            .partial_cmp(&a.1.idf_score)
            .unwrap_or(Ordering::Equal)
            .then(b.1.density.partial_cmp(&a.1.density).unwrap_or(Ordering::Equal))
    });
    Ok(scored.into_iter().take(n).map(|(text, _)| text.to_string()).collect())
}

fn score_sentence(
    query: &Query,
    text: &str,
    tokens: &[String],
    idfs: &IdfTable,
) -> Result<SentenceScore, Error> {
    if tokens.is_empty() {
        return Err(Error::EmptySentence(text.to_string()));
    }
    let mut idf_score = 0.0f32;
    let mut present = 0usize;
    for word in query.words() {
        if tokens.iter().any(|t| t.as_str() == word) {
            present += 1;
            if let Some(idf) = idfs.get(word) {
                idf_score += idf;
            }
        }
    }
    Ok(SentenceScore {
        idf_score,
        density: present as f32 / tokens.len() as f32,
    })
}
