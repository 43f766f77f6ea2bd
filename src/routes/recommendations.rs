use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Recommendation, RecommendationResponse},
    routes::AppState,
    services::recommendations,
};

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| AppError::InvalidInput("Invalid user ID format".to_string()))?;

    tracing::info!(request_id = %request_id, %user_id, "Processing recommendation request");

    let recommendation = recommendations::recommend(state.catalog.as_ref(), user_id).await?;

    if let Recommendation::NoProfile(reason) = &recommendation {
        tracing::info!(request_id = %request_id, reason = ?reason, "No recommendations");
    }

    Ok(Json(recommendation.into()))
}
