use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use nukoken_core::FormError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::store::{self, recipes::CreateRecipe};
use crate::AppState;

use super::RecipeResponse;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder-recipe.jpg";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub tags: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub serving_suggestions: Option<String>,
    pub is_popular: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty()
        || request.description.trim().is_empty()
        || request.ingredients.trim().is_empty()
        || request.instructions.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: FormError::MissingRequiredRecipeFields.to_string(),
            }),
        )
            .into_response();
    }

    if request.categories.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: FormError::NoCategorySelected.to_string(),
            }),
        )
            .into_response();
    }

    let input = CreateRecipe {
        title: request.title,
        description: request.description,
        image_url: request
            .image_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        categories: request.categories,
        prep_time: request.prep_time.unwrap_or(0).max(0),
        cook_time: request.cook_time.unwrap_or(0).max(0),
        servings: request.servings.unwrap_or(4).max(1),
        tags: request.tags.unwrap_or_default(),
        ingredients: request.ingredients,
        instructions: request.instructions,
        serving_suggestions: request
            .serving_suggestions
            .filter(|s| !s.trim().is_empty()),
        is_popular: request.is_popular.unwrap_or(false),
    };

    match store::recipes::create(&ctx.db, &input) {
        Some(recipe) => {
            tracing::info!(slug = %recipe.slug, "recipe created");
            (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Er ging iets mis bij het opslaan van het recept".to_string(),
            }),
        )
            .into_response(),
    }
}
