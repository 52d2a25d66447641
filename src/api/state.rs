use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::Catalog;
use crate::services::index::SimilarityIndex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// The active catalog and similarity index.
///
/// Both are immutable once built; a reload builds a fresh pair off to the
/// side and swaps it in under the write lock, so in-flight queries never
/// observe a partially built index.
pub struct AppStateInner {
    pub catalog: Arc<Catalog>,
    pub index: Arc<SimilarityIndex>,
    pub built_at: DateTime<Utc>,
}

impl AppState {
    /// Creates application state around a fully built catalog and index
    pub fn new(config: Config, catalog: Catalog, index: SimilarityIndex) -> Self {
        Self {
            config,
            inner: Arc::new(RwLock::new(AppStateInner {
                catalog: Arc::new(catalog),
                index: Arc::new(index),
                built_at: Utc::now(),
            })),
        }
    }
}
