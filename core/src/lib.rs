//! quaero-core: document retrieval with sentence-level answers.
//!
//! Given a corpus of text documents and a free-text query, rank documents by
//! TF-IDF, pull candidate sentences out of the best matches, then rank those
//! sentences by summed query-term IDF with a query-term-density tie-break.
//! [`pipeline::answer`] composes the whole flow; the stages are pure and can
//! be called individually.
//!
//! Tokenization and sentence segmentation live in [`tokenizer`] and
//! [`segment`]; the extractor takes them as function values so callers can
//! substitute their own.

pub mod corpus;
pub mod error;
pub mod extract;
pub mod idf;
pub mod loader;
pub mod pipeline;
pub mod rank;
pub mod segment;
pub mod tokenizer;

pub use corpus::{Corpus, Document, Query, SentenceSet};
pub use error::Error;
pub use extract::extract_sentences;
pub use idf::IdfTable;
pub use pipeline::answer;
pub use rank::{top_documents, top_sentences, SentenceScore};
