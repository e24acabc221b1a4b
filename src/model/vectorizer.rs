//! Term-frequency/inverse-document-frequency features for Spanish transcripts.

use std::collections::{BTreeMap, HashMap, HashSet};

use ndarray::{Array1, Array2};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Spanish function words excluded from the feature vocabulary.
const STOPWORDS: &[&str] = &[
    "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "el", "él", "ella", "ellas", "ellos",
    "en", "entre", "era", "es", "esa", "ese", "eso", "esta", "está", "estamos", "están", "estar",
    "estas", "este", "esto", "estos", "estoy", "fue", "ha", "han", "hasta", "hay", "he", "hemos",
    "la", "las", "le", "les", "lo", "los", "más", "me", "mi", "mí", "mis", "mucho", "muchos",
    "muy", "nada", "ni", "no", "nos", "nosotros", "otra", "otras", "otro", "otros", "para",
    "pero", "poco", "por", "porque", "qué", "que", "quien", "quienes", "se", "ser", "sí", "sin",
    "sobre", "son", "su", "sus", "también", "tanto", "te", "tengo", "ti", "tiene", "tienen",
    "todo", "todos", "tu", "tú", "tus", "un", "una", "uno", "unos", "ya", "yo",
];

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Fitted TF-IDF vectorizer mapping text to a fixed-length feature vector.
///
/// Tokens are lowercased Unicode words of two or more characters with
/// stopwords removed. Term weights use the smoothed inverse document
/// frequency `ln((1 + n) / (1 + df)) + 1` and each output vector is
/// L2-normalised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and document frequencies on a training corpus.
    ///
    /// When the corpus holds more distinct terms than `max_features`, the
    /// most frequent terms win, ties broken alphabetically; indices are then
    /// assigned in alphabetical order so fitting is deterministic.
    pub fn fit(documents: &[&str], max_features: usize) -> Self {
        let mut corpus_frequency: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let tokens = tokenize(doc);
            for token in &tokens {
                *corpus_frequency.entry(token.clone()).or_insert(0) += 1;
            }
            let unique: HashSet<&String> = tokens.iter().collect();
            for token in unique {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = corpus_frequency.keys().cloned().collect();
        if terms.len() > max_features {
            terms.sort_by(|a, b| {
                corpus_frequency[b]
                    .cmp(&corpus_frequency[a])
                    .then_with(|| a.cmp(b))
            });
            terms.truncate(max_features);
        }
        terms.sort();

        let vocabulary: BTreeMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let n_documents = documents.len() as f64;
        let mut idf = vec![0.0; terms.len()];
        for (term, &idx) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
            idf[idx] = ((1.0 + n_documents) / (1.0 + df)).ln() + 1.0;
        }

        Self { vocabulary, idf }
    }

    /// Transform one document into an L2-normalised TF-IDF vector.
    ///
    /// Unknown terms contribute nothing; a document with no known terms maps
    /// to the zero vector.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut weights: Array1<f64> = Array1::zeros(self.vocabulary.len());
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                weights[idx] += self.idf[idx];
            }
        }
        let norm = weights.dot(&weights).sqrt();
        if norm > 0.0 {
            weights.mapv_inplace(|w| w / norm);
        }
        weights
    }

    /// Transform a corpus into a feature matrix, one row per document.
    pub fn transform_batch(&self, documents: &[&str]) -> Array2<f64> {
        let mut matrix = Array2::zeros((documents.len(), self.vocabulary.len()));
        for (row, doc) in documents.iter().enumerate() {
            matrix.row_mut(row).assign(&self.transform(doc));
        }
        matrix
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|hit| hit.as_str().to_string())
        .filter(|token| !STOPWORDS.contains(&token.as_str()))
        .collect()
}
