use crate::error::Error;
use std::collections::{HashMap, HashSet};

/// Immutable word-to-inverse-document-frequency table.
///
/// A word is present iff it occurs in at least one of the token sequences the
/// table was built from. Its value is `ln(N / df)` where `N` is the number of
/// sequences and `df` the number of sequences containing the word, so values
/// are non-negative and exactly 0 for words that appear everywhere.
#[derive(Debug, Clone)]
pub struct IdfTable {
    values: HashMap<String, f32>,
}

impl IdfTable {
    /// Compute IDF values over a collection of token sequences. Presence, not
    /// occurrence count, drives document frequency.
    ///
    /// Returns [`Error::EmptyCorpus`] when the collection is empty, since the
    /// formula divides by its size. Each call builds an independent table;
    /// the pipeline computes one over the corpus and a second over the
    /// extracted sentences without shared state.
    pub fn compute<'a, I>(documents: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut df: HashMap<&str, u32> = HashMap::new();
        let mut n: u32 = 0;
        for tokens in documents {
            n += 1;
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for word in distinct {
                *df.entry(word).or_insert(0) += 1;
            }
        }
        if n == 0 {
            return Err(Error::EmptyCorpus);
        }
        let values = df
            .into_iter()
            .map(|(word, df_w)| (word.to_string(), ((n as f32) / (df_w as f32)).ln()))
            .collect();
        Ok(Self { values })
    }

    /// IDF value for a word, or `None` if it never appeared in the corpus the
    /// table was built from.
    pub fn get(&self, word: &str) -> Option<f32> {
        self.values.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
