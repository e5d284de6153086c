pub mod create;
pub mod delete;
pub mod detail;
pub mod featured;
pub mod get;
pub mod list;
pub mod list_all;
pub mod update;

use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use nukoken_core::BlogPost;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Returns the router for /api/blog endpoints (mounted at /api/blog).
/// Reads are public except the draft views; the write handlers require an
/// [`crate::auth::AdminSession`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_posts).post(create::create_post))
        .route("/all", get(list_all::list_all_posts))
        .route("/featured", get(featured::featured_posts))
        .route("/by-slug/{slug}", get(detail::post_detail))
        .route(
            "/{id}",
            get(get::get_post)
                .put(update::update_post)
                .delete(delete::delete_post),
        )
}

/// A persisted blog post as every endpoint returns it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    /// Category slug (starter-van-scratch, voor-beginners, tips-en-tricks, recepten)
    pub category: String,
    pub category_title: String,
    pub category_icon: String,
    pub tags: String,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        BlogPostResponse {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            image_url: post.image_url,
            category: post.category.slug().to_string(),
            category_title: post.category.title().to_string(),
            category_icon: post.category.icon().to_string(),
            tags: post.tags,
            is_featured: post.is_featured,
            is_published: post.is_published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_posts,
        list_all::list_all_posts,
        featured::featured_posts,
        detail::post_detail,
        get::get_post,
        create::create_post,
        update::update_post,
        delete::delete_post,
    ),
    components(schemas(
        BlogPostResponse,
        list::BlogPostsResponse,
        create::CreateBlogPostRequest,
        update::UpdateBlogPostRequest,
    ))
)]
pub struct ApiDoc;
