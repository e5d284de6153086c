use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nukoken_core::Criteria;
use serde::Serialize;
use utoipa::ToSchema;

use crate::store;
use crate::AppState;

use super::RecipeResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrowseRecipesResponse {
    /// Recipes matching every active filter, in the selected sort order
    pub recipes: Vec<RecipeResponse>,
    /// Number of matching recipes
    pub total: usize,
    /// Canonical query string for this view; empty when no filter is
    /// active, so the client can reset the URL to its bare path
    pub query_string: String,
}

/// Browse the recipe collection. The whole view is a function of the query
/// string: requesting the same parameters again reproduces it exactly.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(
        ("search" = Option<String>, Query, description = "Free-text search over title, description, tags and ingredients"),
        ("category" = Option<String>, Query, description = "Category label the recipe must carry"),
        ("tag" = Option<String>, Query, description = "Substring match on the tag string (legacy alias: difficulty)"),
        ("ingredient" = Option<String>, Query, description = "Substring match on the ingredient text"),
        ("servings" = Option<String>, Query, description = "Maximum number of servings"),
        ("maxTime" = Option<String>, Query, description = "Maximum total time in minutes"),
        ("sort" = Option<String>, Query, description = "newest | oldest | popular | alphabetical | time-asc | time-desc | servings-asc | servings-desc"),
    ),
    responses(
        (status = 200, description = "Filtered and sorted recipes", body = BrowseRecipesResponse)
    )
)]
pub async fn browse_recipes(
    State(ctx): State<AppState>,
    Query(criteria): Query<Criteria>,
) -> impl IntoResponse {
    let all = store::recipes::list(&ctx.db);
    let matched = criteria.apply(&all);

    let response = BrowseRecipesResponse {
        total: matched.len(),
        query_string: criteria.to_query_string(),
        recipes: matched.into_iter().map(RecipeResponse::from).collect(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
