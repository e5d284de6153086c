use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::auth::AdminSession;
use crate::store;
use crate::AppState;

use super::list::BlogPostsResponse;
use super::BlogPostResponse;

/// Every post including drafts, for the admin overview.
#[utoipa::path(
    get,
    path = "/api/blog/all",
    tag = "blog",
    responses(
        (status = 200, description = "All blog posts including drafts", body = BlogPostsResponse),
        (status = 401, description = "Unauthorized", body = crate::api::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_all_posts(
    _admin: AdminSession,
    State(ctx): State<AppState>,
) -> impl IntoResponse {
    let posts = store::blog::list_all(&ctx.db);
    let response = BlogPostsResponse {
        posts: posts.into_iter().map(BlogPostResponse::from).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
