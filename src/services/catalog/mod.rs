//! Recipe catalog abstraction
//!
//! Search and recommendation never touch storage directly; they go through
//! [`RecipeCatalog`], which the Postgres implementation backs in production
//! and test doubles back in tests.
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{InclusiveRange, Ingredient, Like, Recipe},
};

pub mod postgres;

pub use postgres::PgRecipeCatalog;

/// Read access to recipes, ingredients and likes
///
/// Implementations report storage failures as errors and absence as `None`
/// or an empty list. Callers propagate errors unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Looks up a single recipe; `Ok(None)` when it no longer exists
    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// Recipes whose cost and cooking time both fall inside the given ranges
    ///
    /// The returned order is the implementation's and is preserved by the
    /// recommendation filter.
    async fn recipes_in_range(
        &self,
        cost: InclusiveRange,
        cooking_time: InclusiveRange,
    ) -> AppResult<Vec<Recipe>>;

    /// All likes recorded for a user
    async fn likes_for(&self, user_id: Uuid) -> AppResult<Vec<Like>>;

    /// Every published recipe, in the order search results should be listed
    async fn search_candidates(&self) -> AppResult<Vec<Recipe>>;

    /// Every ingredient, in the order search results should be listed
    async fn ingredient_candidates(&self) -> AppResult<Vec<Ingredient>>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}
