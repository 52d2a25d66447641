pub mod index;
pub mod normalizer;
pub mod recommendations;

use std::path::Path;

use crate::config::Config;
use crate::dataset;
use crate::error::AppResult;
use crate::models::Catalog;
use self::index::SimilarityIndex;

/// Loads the dataset file, normalizes it and builds the similarity index.
///
/// Used both at startup and on reload; the caller decides what to do with
/// the freshly built pair.
pub fn build_from_dataset(config: &Config) -> AppResult<(Catalog, SimilarityIndex)> {
    let table = dataset::load_csv(Path::new(&config.dataset_path))?;
    let catalog = normalizer::normalize(&table)?;
    let index = SimilarityIndex::build(&catalog, config.max_features);

    tracing::info!(
        items = catalog.len(),
        vocabulary = index.vocabulary().len(),
        "similarity index built"
    );

    Ok((catalog, index))
}
