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

#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = "blog",
    params(
        ("id" = i32, Path, description = "Blog post ID")
    ),
    responses(
        (status = 204, description = "Blog post deleted successfully"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_post(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    if store::blog::delete(&ctx.db, id) {
        tracing::info!(id, "blog post deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Blogpost niet gevonden".to_string(),
            }),
        )
            .into_response()
    }
}
