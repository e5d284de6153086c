use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nukoken_core::BlogCategory;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::store;
use crate::AppState;

use super::BlogPostResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPostsParams {
    /// Restrict to one category slug; unknown slugs yield an empty list
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogPostsResponse {
    pub posts: Vec<BlogPostResponse>,
}

/// Published posts, newest first.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Published blog posts", body = BlogPostsResponse)
    )
)]
pub async fn list_posts(
    State(ctx): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> impl IntoResponse {
    let category = match params.category.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => match BlogCategory::from_slug(slug) {
            Some(category) => Some(category),
            // An unknown category names an empty shelf, not an error.
            None => {
                return (
                    StatusCode::OK,
                    Json(BlogPostsResponse { posts: Vec::new() }),
                )
                    .into_response()
            }
        },
        _ => None,
    };

    let posts = store::blog::list_published(&ctx.db, category);
    let response = BlogPostsResponse {
        posts: posts.into_iter().map(BlogPostResponse::from).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
