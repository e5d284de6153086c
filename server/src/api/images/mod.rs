pub mod get;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

use crate::images::MAX_UPLOAD_SIZE;
use crate::AppState;

/// Returns the router for /api/images endpoints (mounted at /api/images).
/// Fetching is public; uploading requires an [`crate::auth::AdminSession`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            // Leave headroom for the multipart framing around a max-size file.
            post(upload::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 16 * 1024)),
        )
        .route("/{id}", get(get::get_image))
}

#[derive(OpenApi)]
#[openapi(
    paths(upload::upload, get::get_image),
    components(schemas(upload::UploadImageRequest, upload::UploadImageResponse))
)]
pub struct ApiDoc;
