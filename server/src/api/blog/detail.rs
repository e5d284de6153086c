use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::ErrorResponse;
use crate::store;
use crate::AppState;

use super::BlogPostResponse;

#[utoipa::path(
    get,
    path = "/api/blog/by-slug/{slug}",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "Blog post slug")
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPostResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse)
    )
)]
pub async fn post_detail(State(ctx): State<AppState>, Path(slug): Path<String>) -> impl IntoResponse {
    match store::blog::get_by_slug(&ctx.db, &slug) {
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
