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

use super::BlogPostResponse;

/// Fetch one post by id, as the edit form loads it (drafts included).
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "blog",
    params(
        ("id" = i32, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPostResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_post(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match store::blog::get_by_id(&ctx.db, id) {
        Some(post) => (StatusCode::OK, Json(BlogPostResponse::from(post))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Blogpost niet gevonden".to_string(),
            }),
        )
            .into_response(),
    }
}
