//! TF-IDF text relevance over the site corpus.
//!
//! Each site contributes one bag-of-terms document built from its feature
//! string. A query is scored against every document at once; with a corpus
//! of at most a few thousand sites, brute-force scoring is cheaper than any
//! inverted-index machinery would buy back.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::Site;

/// Errors raised while building the text index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot build a text index over an empty corpus")]
    EmptyCorpus,
}

/// Term-frequency / inverse-document-frequency model over the corpus.
///
/// Invariant: document ordinal `i` corresponds to `sites[i]` of the slice
/// the index was built from. `scores` returns exactly one value per document
/// in that same order, so callers can zip results back onto the corpus.
/// A corpus refresh must rebuild the index from the new slice; the two are
/// only ever published together.
#[derive(Debug)]
pub struct TextIndex {
    /// Per-document term counts, in corpus order.
    documents: Vec<HashMap<String, f64>>,
    /// Number of documents each term appears in.
    doc_freq: HashMap<String, usize>,
}

impl TextIndex {
    /// Builds the index from the corpus, one document per site in order.
    pub fn build(sites: &[Site]) -> Result<Self, IndexError> {
        if sites.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let mut documents = Vec::with_capacity(sites.len());
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for site in sites {
            let mut counts: HashMap<String, f64> = HashMap::new();
            for term in tokenize(&site.feature_string()) {
                *counts.entry(term).or_insert(0.0) += 1.0;
            }
            for term in counts.keys() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            documents.push(counts);
        }

        Ok(Self {
            documents,
            doc_freq,
        })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// TF-IDF relevance of `query` against every document.
    ///
    /// Per document: sum over the query's terms of
    /// `tf(term, doc) * (1 + ln(N / (1 + df(term))))`. Repeated query terms
    /// count once per occurrence. Pure function of the built index and the
    /// query string; identical inputs always yield identical values.
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let terms: Vec<String> = tokenize(query).collect();

        self.documents
            .iter()
            .map(|doc| {
                terms
                    .iter()
                    .map(|term| doc.get(term).copied().unwrap_or(0.0) * self.idf(term))
                    .sum()
            })
            .collect()
    }

    fn idf(&self, term: &str) -> f64 {
        let df = self.doc_freq.get(term).copied().unwrap_or(0) as f64;
        let n = self.documents.len() as f64;
        1.0 + (n / (1.0 + df)).ln()
    }
}

/// Splits text into lowercase alphanumeric terms.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
