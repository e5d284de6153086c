use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::store;
use crate::AppState;

use super::list::BlogPostsResponse;
use super::BlogPostResponse;

/// How many featured posts the home page shows.
const FEATURED_LIMIT: i64 = 3;

#[utoipa::path(
    get,
    path = "/api/blog/featured",
    tag = "blog",
    responses(
        (status = 200, description = "Featured published posts, newest first", body = BlogPostsResponse)
    )
)]
pub async fn featured_posts(State(ctx): State<AppState>) -> impl IntoResponse {
    let posts = store::blog::featured(&ctx.db, FEATURED_LIMIT);
    let response = BlogPostsResponse {
        posts: posts.into_iter().map(BlogPostResponse::from).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
