use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::store;
use crate::AppState;

use super::RecipeResponse;

/// Fetch one recipe by id, as the edit form loads it.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(ctx): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match store::recipes::get_by_id(&ctx.db, id) {
        Some(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recept niet gevonden".to_string(),
            }),
        )
            .into_response(),
    }
}
