mod recipe;
mod recommendation;

pub use recipe::{Ingredient, Like, Recipe};
pub use recommendation::{
    InclusiveRange, NoProfileReason, Recommendation, RecommendationResponse, TasteProfile,
};
