use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::{AppError, AppResult},
    middleware::{make_span_with_request_id, request_id_middleware},
};

pub mod ingredients;
pub mod recipes;
pub mod recommendations;
mod state;

pub use state::AppState;

/// Query string shared by the search endpoints
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// The search word, rejecting a missing or blank `q`
    pub fn term(&self) -> AppResult<&str> {
        if self.q.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Query parameter 'q' is required".to_string(),
            ));
        }
        Ok(&self.q)
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes/search", get(recipes::search))
        .route("/ingredients/search", get(ingredients::search))
        .route(
            "/recommendations/:user_id",
            get(recommendations::recommend),
        )
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_term() {
        let query = SearchQuery {
            q: "牛丼".to_string(),
        };
        assert_eq!(query.term().unwrap(), "牛丼");
    }

    #[test]
    fn test_search_query_blank_is_invalid() {
        for q in ["", "   ", "\u{3000}"] {
            let query = SearchQuery { q: q.to_string() };
            assert!(matches!(query.term(), Err(AppError::InvalidInput(_))));
        }
    }
}
