use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nukoken_core::{category_icon, scaled_groups};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::ErrorResponse;
use crate::store;
use crate::AppState;

use super::RecipeResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DetailParams {
    /// Serving count to scale the ingredient quantities to
    /// (default: the recipe's own serving count)
    pub servings: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientGroupView {
    /// Subgroup header, absent for the implicit leading group
    pub name: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryBadge {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeDetailResponse {
    pub recipe: RecipeResponse,
    /// Serving count the quantities below are scaled to
    pub servings: i32,
    pub categories: Vec<CategoryBadge>,
    pub ingredient_groups: Vec<IngredientGroupView>,
    /// Instruction steps in order
    pub steps: Vec<String>,
}

/// The recipe detail view: the record itself plus its ingredient block
/// parsed into subgroups and rescaled to the requested serving count.
#[utoipa::path(
    get,
    path = "/api/recipes/by-slug/{slug}",
    tag = "recipes",
    params(
        ("slug" = String, Path, description = "Recipe slug"),
        DetailParams
    ),
    responses(
        (status = 200, description = "Recipe detail", body = RecipeDetailResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn recipe_detail(
    State(ctx): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<DetailParams>,
) -> impl IntoResponse {
    let recipe = match store::recipes::get_by_slug(&ctx.db, &slug) {
        Some(r) => r,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recept niet gevonden".to_string(),
                }),
            )
                .into_response()
        }
    };

    let servings = params
        .servings
        .filter(|&s| s > 0)
        .unwrap_or(recipe.servings);

    let ingredient_groups = scaled_groups(&recipe.ingredients, servings, recipe.servings)
        .into_iter()
        .map(|g| IngredientGroupView {
            name: g.name,
            items: g.items,
        })
        .collect();

    let steps = recipe
        .instructions
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    let categories = recipe
        .categories
        .iter()
        .map(|name| CategoryBadge {
            icon: category_icon(name).to_string(),
            name: name.clone(),
        })
        .collect();

    let response = RecipeDetailResponse {
        servings,
        categories,
        ingredient_groups,
        steps,
        recipe: RecipeResponse::from(recipe),
    };

    (StatusCode::OK, Json(response)).into_response()
}
