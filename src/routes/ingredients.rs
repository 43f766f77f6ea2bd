use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::Ingredient,
    routes::{AppState, SearchQuery},
    services::recipe_search,
};

/// Handler for ingredient name search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Ingredient>>> {
    let query = params.term()?;
    let ingredients =
        recipe_search::search_ingredients(state.catalog.as_ref(), &state.matcher(), query).await?;
    Ok(Json(ingredients))
}
