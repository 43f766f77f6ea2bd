use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published recipe as seen by search and recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    /// Genre name, e.g. "和食"
    pub genre: String,
    /// Estimated cost in whole currency units
    pub cost_estimate: i32,
    /// Cooking time in minutes
    pub cooking_time: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// An ingredient that can be searched by name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub genre: String,
}

/// A user's like on a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Like {
    pub fn new(user_id: Uuid, recipe_id: Uuid) -> Self {
        Self {
            user_id,
            recipe_id,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_serialization() {
        let recipe = Recipe {
            id: Uuid::nil(),
            name: "親子丼".to_string(),
            genre: "和食".to_string(),
            cost_estimate: 500,
            cooking_time: 20,
            image_url: None,
            summary: None,
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["name"], "親子丼");
        assert_eq!(json["genre"], "和食");
        assert_eq!(json["cost_estimate"], 500);
        assert_eq!(json["cooking_time"], 20);
        assert!(json["image_url"].is_null());
    }

    #[test]
    fn test_recipe_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "牛丼",
            "genre": "和食",
            "cost_estimate": 600,
            "cooking_time": 15
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "牛丼");
        assert_eq!(recipe.summary, None);
    }

    #[test]
    fn test_like_new_has_no_timestamp() {
        let user_id = Uuid::new_v4();
        let recipe_id = Uuid::new_v4();
        let like = Like::new(user_id, recipe_id);
        assert_eq!(like.user_id, user_id);
        assert_eq!(like.recipe_id, recipe_id);
        assert_eq!(like.created_at, None);
    }
}
