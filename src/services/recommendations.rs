use crate::error::{AppError, AppResult};
use crate::models::{Catalog, CatalogItem};
use crate::services::index::SimilarityIndex;

/// Number of recommendations returned per query
pub const TOP_K: usize = 5;

/// Returns the catalog items most similar to `title`, best first.
///
/// Lookup is exact and case-sensitive; the queried item itself is always
/// excluded. Entries are ranked by descending similarity with ties broken
/// by ascending catalog index, so repeated queries return identical
/// results. At most [`TOP_K`] items are returned, fewer for small
/// catalogs, never padded.
pub fn recommend(
    catalog: &Catalog,
    index: &SimilarityIndex,
    title: &str,
) -> AppResult<Vec<CatalogItem>> {
    let selected = catalog
        .position(title)
        .ok_or_else(|| AppError::NotFound(format!("title not in catalog: {}", title)))?;

    let row = index.matrix().row(selected);
    let mut ranked: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| i != selected)
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_K);

    Ok(ranked
        .into_iter()
        .filter_map(|(i, _)| catalog.get(i).cloned())
        .collect())
}
