use thiserror::Error;

/// Errors raised by the ranking pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The IDF builder was given zero documents; `ln(N / df)` needs `N >= 1`.
    #[error("cannot compute IDF values over an empty corpus")]
    EmptyCorpus,
    /// A sentence with no tokens reached the sentence ranker. The extractor
    /// drops such sentences, so this means a caller bypassed it. Failing here
    /// beats dividing by zero in the density calculation.
    #[error("sentence has no tokens: {0:?}")]
    EmptySentence(String),
}
