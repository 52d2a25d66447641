use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::CatalogItem;
use crate::services::{self, recommendations};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub description: String,
    pub rating: String,
}

impl From<&CatalogItem> for RecommendationResponse {
    fn from(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            genre: item.genre.clone(),
            director: item.director.clone(),
            description: item.description.clone(),
            rating: item.rating.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub titles: usize,
    pub vocabulary_size: usize,
    pub built_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub titles: usize,
    pub vocabulary_size: usize,
    pub built_at: DateTime<Utc>,
}

// Handlers

/// Health check with index statistics
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let inner = state.inner.read().await;
    Json(HealthResponse {
        status: "healthy",
        titles: inner.catalog.len(),
        vocabulary_size: inner.index.vocabulary().len(),
        built_at: inner.built_at,
    })
}

/// Full ordered title list for populating a selection control
pub async fn get_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    let inner = state.inner.read().await;
    let titles: Vec<String> = inner.catalog.titles().map(str::to_string).collect();
    Json(titles)
}

/// Top recommendations for an exact title
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<RecommendationResponse>>> {
    let inner = state.inner.read().await;
    let items = recommendations::recommend(&inner.catalog, &inner.index, &query.title)?;
    Ok(Json(items.iter().map(RecommendationResponse::from).collect()))
}

/// Rebuilds the catalog and index from the dataset file, then swaps the
/// fresh pair in atomically. In-flight queries keep reading the old pair
/// until the swap.
pub async fn reload(State(state): State<AppState>) -> AppResult<Json<ReloadResponse>> {
    let config = state.config.clone();
    let (catalog, index) =
        tokio::task::spawn_blocking(move || services::build_from_dataset(&config))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??;

    let mut inner = state.inner.write().await;
    inner.catalog = Arc::new(catalog);
    inner.index = Arc::new(index);
    inner.built_at = Utc::now();

    Ok(Json(ReloadResponse {
        titles: inner.catalog.len(),
        vocabulary_size: inner.index.vocabulary().len(),
        built_at: inner.built_at,
    }))
}
