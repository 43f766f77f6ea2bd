use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::Recipe,
    routes::{AppState, SearchQuery},
    services::recipe_search,
};

/// Handler for recipe name search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Recipe>>> {
    let query = params.term()?;

    tracing::info!(request_id = %request_id, query = %query, "Processing recipe search");

    let recipes = recipe_search::search_recipes(
        state.catalog.as_ref(),
        state.cache.as_ref(),
        state.search_cache_ttl,
        &state.matcher(),
        query,
    )
    .await?;

    Ok(Json(recipes))
}
