use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nukoken_core::FormError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::store::{self, recipes::UpdateRecipe};
use crate::AppState;

use super::RecipeResponse;

/// Partial update: absent fields keep their stored value. A new title also
/// regenerates the slug.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub categories: Option<Vec<String>>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub tags: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub serving_suggestions: Option<String>,
    pub is_popular: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    // Fields that are present may not be blanked out.
    let blanked = [
        request.title.as_deref(),
        request.description.as_deref(),
        request.ingredients.as_deref(),
        request.instructions.as_deref(),
    ]
    .into_iter()
    .any(|field| field.is_some_and(|v| v.trim().is_empty()));
    if blanked {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: FormError::MissingRequiredRecipeFields.to_string(),
            }),
        )
            .into_response();
    }

    if request.categories.as_ref().is_some_and(|c| c.is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: FormError::NoCategorySelected.to_string(),
            }),
        )
            .into_response();
    }

    if store::recipes::get_by_id(&ctx.db, id).is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recept niet gevonden".to_string(),
            }),
        )
            .into_response();
    }

    let input = UpdateRecipe {
        title: request.title,
        description: request.description,
        image_url: request.image_url,
        categories: request.categories,
        prep_time: request.prep_time.map(|v| v.max(0)),
        cook_time: request.cook_time.map(|v| v.max(0)),
        servings: request.servings.map(|v| v.max(1)),
        tags: request.tags,
        ingredients: request.ingredients,
        instructions: request.instructions,
        serving_suggestions: request.serving_suggestions,
        is_popular: request.is_popular,
    };

    match store::recipes::update(&ctx.db, id, &input) {
        Some(recipe) => {
            tracing::info!(slug = %recipe.slug, "recipe updated");
            (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Er ging iets mis bij het bijwerken van het recept".to_string(),
            }),
        )
            .into_response(),
    }
}
