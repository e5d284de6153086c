use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use nukoken_core::{BlogCategory, FormError};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::store::{self, blog::CreateBlogPost};
use crate::AppState;

use super::BlogPostResponse;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    /// Category slug
    #[schema(value_type = Option<String>)]
    pub category: Option<BlogCategory>,
    pub tags: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Blog post created successfully", body = BlogPostResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_post(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    Json(request): Json<CreateBlogPostRequest>,
) -> impl IntoResponse {
    let missing = request.title.trim().is_empty()
        || request.excerpt.trim().is_empty()
        || request.content.trim().is_empty()
        || request.category.is_none();
    if missing {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: FormError::MissingRequiredPostFields.to_string(),
            }),
        )
            .into_response();
    }

    let input = CreateBlogPost {
        title: request.title,
        excerpt: request.excerpt,
        content: request.content,
        image_url: request.image_url.unwrap_or_default(),
        category: request.category.unwrap_or_default(),
        tags: request.tags.unwrap_or_default(),
        is_featured: request.is_featured.unwrap_or(false),
        is_published: request.is_published.unwrap_or(false),
    };

    match store::blog::create(&ctx.db, &input) {
        Some(post) => {
            tracing::info!(slug = %post.slug, "blog post created");
            (StatusCode::CREATED, Json(BlogPostResponse::from(post))).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Er ging iets mis bij het aanmaken van de blog post".to_string(),
            }),
        )
            .into_response(),
    }
}
