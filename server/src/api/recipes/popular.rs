use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::store;
use crate::AppState;

use super::RecipeResponse;

/// How many popular picks the home page shows.
const POPULAR_LIMIT: i64 = 6;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PopularRecipesResponse {
    pub recipes: Vec<RecipeResponse>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/popular",
    tag = "recipes",
    responses(
        (status = 200, description = "Popular recipes, newest first", body = PopularRecipesResponse)
    )
)]
pub async fn popular_recipes(State(ctx): State<AppState>) -> impl IntoResponse {
    let recipes = store::recipes::popular(&ctx.db, POPULAR_LIMIT);
    let response = PopularRecipesResponse {
        recipes: recipes.into_iter().map(RecipeResponse::from).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
