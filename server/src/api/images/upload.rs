use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::images::validate_upload;
use crate::models::NewImage;
use crate::schema::images;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadImageResponse {
    pub id: Uuid,
    /// URL the image can be fetched from
    pub url: String,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/images",
    tag = "images",
    request_body(content_type = "multipart/form-data", content = UploadImageRequest),
    responses(
        (status = 201, description = "Image uploaded successfully", body = UploadImageResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload(
    _admin: AdminSession,
    State(ctx): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Get the file from multipart
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Geen bestand geüpload".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Multipart read error: {}", e);
            let error = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "Bestand is te groot (max 5MB)".to_string()
            } else {
                format!("Kon upload niet lezen: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error })).into_response();
        }
    };

    let filename = field.file_name().unwrap_or("upload").to_string();

    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            let error = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                "Bestand is te groot (max 5MB)".to_string()
            } else {
                format!("Kon bestand niet lezen: {}", e.body_text())
            };
            return (e.status(), Json(ErrorResponse { error })).into_response();
        }
    };

    // Sniff the format and check the allow-list and size cap
    let content_type = match validate_upload(&data) {
        Ok(content_type) => content_type,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response()
        }
    };

    let mut conn = match ctx.db.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Er ging iets mis bij het uploaden".to_string(),
                }),
            )
                .into_response();
        }
    };

    let new_image = NewImage {
        filename: &filename,
        content_type: &content_type,
        data: &data,
    };

    let image_id: Uuid = match diesel::insert_into(images::table)
        .values(&new_image)
        .returning(images::id)
        .get_result(&mut conn)
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to save image: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Er ging iets mis bij het uploaden".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::info!(%image_id, %content_type, "image uploaded");

    (
        StatusCode::CREATED,
        Json(UploadImageResponse {
            id: image_id,
            url: format!("/api/images/{}", image_id),
        }),
    )
        .into_response()
}
