use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::api::ErrorResponse;
use crate::models::Image;
use crate::schema::images;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/images/{id}",
    tag = "images",
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image bytes with the stored content type"),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
pub async fn get_image(State(ctx): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let mut conn = match ctx.db.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Er ging iets mis bij het ophalen van de afbeelding".to_string(),
                }),
            )
                .into_response();
        }
    };

    let image: Image = match images::table
        .find(id)
        .select(Image::as_select())
        .first(&mut conn)
    {
        Ok(image) => image,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Afbeelding niet gevonden".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch image: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Er ging iets mis bij het ophalen van de afbeelding".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, image.content_type)],
        image.data,
    )
        .into_response()
}
