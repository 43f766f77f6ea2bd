pub mod catalog;
pub mod profile;
pub mod recipe_search;
pub mod recommendations;
pub mod text;
