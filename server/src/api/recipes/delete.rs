use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::store;
use crate::AppState;

/// Hard delete; there is no soft-delete or versioning for recipes.
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_recipe(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    if store::recipes::delete(&ctx.db, id) {
        tracing::info!(id, "recipe deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recept niet gevonden".to_string(),
            }),
        )
            .into_response()
    }
}
