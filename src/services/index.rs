use std::collections::{HashMap, HashSet};

use crate::models::Catalog;

/// Default cap on the bag-of-words vocabulary size
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Common English stopwords excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "could",
    "did", "do", "does", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in", "into", "is",
    "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your",
];

/// Mapping from token to a fixed vector column, built once from the full
/// tag corpus and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct TermVocabulary {
    index: HashMap<String, usize>,
}

impl TermVocabulary {
    /// Selects the top `max_features` tokens by corpus document frequency.
    ///
    /// Frequency ties are broken by ascending token order so the selected
    /// vocabulary is identical across runs.
    fn from_corpus(docs: &[Vec<String>], max_features: usize) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in docs {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = document_frequency.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        let index = ranked
            .into_iter()
            .enumerate()
            .map(|(column, (token, _))| (token.to_string(), column))
            .collect();

        Self { index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Vector column for a token, if it made the vocabulary cut
    pub fn column(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }
}

/// Dense symmetric matrix of pairwise cosine similarities
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Number of rows (equals the catalog length)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Similarity row for one catalog index
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

/// Precomputed bag-of-words similarity index over a catalog.
///
/// Built once before any query is served; immutable afterwards, so it can
/// be shared across concurrent queries without locking.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    vocabulary: TermVocabulary,
    matrix: SimilarityMatrix,
}

impl SimilarityIndex {
    /// Tokenizes every tag, selects the vocabulary, produces term-frequency
    /// count vectors and computes the full cosine similarity matrix.
    ///
    /// Pairs involving a zero-norm vector (every token filtered out) get
    /// similarity 0.0, including the diagonal, rather than NaN. The dense
    /// O(N²) matrix is a deliberate choice bounded to small-to-medium
    /// catalogs.
    pub fn build(catalog: &Catalog, max_features: usize) -> Self {
        let docs: Vec<Vec<String>> = catalog
            .items()
            .iter()
            .map(|item| tokenize(&item.tag))
            .collect();

        let vocabulary = TermVocabulary::from_corpus(&docs, max_features);

        let vectors: Vec<Vec<u32>> = docs
            .iter()
            .map(|doc| {
                let mut counts = vec![0u32; vocabulary.len()];
                for token in doc {
                    if let Some(column) = vocabulary.column(token) {
                        counts[column] += 1;
                    }
                }
                counts
            })
            .collect();

        let norms: Vec<f64> = vectors
            .iter()
            .map(|v| {
                v.iter()
                    .map(|&count| f64::from(count) * f64::from(count))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        let size = vectors.len();
        let mut data = vec![0.0f64; size * size];
        for i in 0..size {
            if norms[i] == 0.0 {
                continue;
            }
            data[i * size + i] = 1.0;
            for j in (i + 1)..size {
                if norms[j] == 0.0 {
                    continue;
                }
                let dot: f64 = vectors[i]
                    .iter()
                    .zip(&vectors[j])
                    .map(|(&a, &b)| f64::from(a) * f64::from(b))
                    .sum();
                let score = dot / (norms[i] * norms[j]);
                data[i * size + j] = score;
                data[j * size + i] = score;
            }
        }

        Self {
            vocabulary,
            matrix: SimilarityMatrix { size, data },
        }
    }

    pub fn vocabulary(&self) -> &TermVocabulary {
        &self.vocabulary
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }
}

/// Splits a tag into alphanumeric tokens, dropping stopwords and
/// single-character fragments. Tags are already lowercase.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}
