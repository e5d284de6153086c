use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use nukoken_core::{BlogCategory, FormError};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::store::{self, blog::UpdateBlogPost};
use crate::AppState;

use super::BlogPostResponse;

/// Partial update: absent fields keep their stored value. A new title also
/// regenerates the slug.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    /// Category slug
    #[schema(value_type = Option<String>)]
    pub category: Option<BlogCategory>,
    pub tags: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    tag = "blog",
    params(
        ("id" = i32, Path, description = "Blog post ID")
    ),
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Blog post updated successfully", body = BlogPostResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_post(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBlogPostRequest>,
) -> impl IntoResponse {
    let blanked = [
        request.title.as_deref(),
        request.excerpt.as_deref(),
        request.content.as_deref(),
    ]
    .into_iter()
    .any(|field| field.is_some_and(|v| v.trim().is_empty()));
    if blanked {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: FormError::MissingRequiredPostFields.to_string(),
            }),
        )
            .into_response();
    }

    if store::blog::get_by_id(&ctx.db, id).is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Blogpost niet gevonden".to_string(),
            }),
        )
            .into_response();
    }

    let input = UpdateBlogPost {
        title: request.title,
        excerpt: request.excerpt,
        content: request.content,
        image_url: request.image_url,
        category: request.category,
        tags: request.tags,
        is_featured: request.is_featured,
        is_published: request.is_published,
    };

    match store::blog::update(&ctx.db, id, &input) {
        Some(post) => {
            tracing::info!(slug = %post.slug, "blog post updated");
            (StatusCode::OK, Json(BlogPostResponse::from(post))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Er ging iets mis bij het bijwerken van de blog post".to_string(),
            }),
        )
            .into_response(),
    }
}
