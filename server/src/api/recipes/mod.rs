pub mod browse;
pub mod create;
pub mod delete;
pub mod detail;
pub mod get;
pub mod popular;
pub mod update;

use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use nukoken_core::Recipe;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes).
/// Reads are public; the write handlers require an [`crate::auth::AdminSession`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(browse::browse_recipes).post(create::create_recipe))
        .route("/popular", get(popular::popular_recipes))
        .route("/by-slug/{slug}", get(detail::recipe_detail))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

/// A persisted recipe as every endpoint returns it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub tags: String,
    pub ingredients: String,
    pub instructions: String,
    pub serving_suggestions: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            slug: recipe.slug,
            description: recipe.description,
            image_url: recipe.image_url,
            categories: recipe.categories,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            serving_suggestions: recipe.serving_suggestions,
            is_popular: recipe.is_popular,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        browse::browse_recipes,
        popular::popular_recipes,
        detail::recipe_detail,
        get::get_recipe,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        RecipeResponse,
        browse::BrowseRecipesResponse,
        popular::PopularRecipesResponse,
        detail::RecipeDetailResponse,
        detail::IngredientGroupView,
        detail::CategoryBadge,
        create::CreateRecipeRequest,
        update::UpdateRecipeRequest,
    ))
)]
pub struct ApiDoc;
