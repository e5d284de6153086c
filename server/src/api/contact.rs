use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::ErrorResponse;
use crate::mailer::ContactMessage;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message sent", body = ContactResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 502, description = "Mail delivery failed", body = ErrorResponse)
    )
)]
pub async fn send_contact_message(
    State(ctx): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> impl IntoResponse {
    let missing = request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.subject.trim().is_empty()
        || request.message.trim().is_empty();
    if missing {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Alle velden zijn verplicht".to_string(),
            }),
        )
            .into_response();
    }

    let mailer = match &ctx.mailer {
        Some(mailer) => mailer,
        None => {
            tracing::error!("Contact form submitted but mail delivery is not configured");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Er ging iets mis bij het versturen van de email".to_string(),
                }),
            )
                .into_response();
        }
    };

    let message = ContactMessage {
        name: request.name,
        email: request.email,
        subject: request.subject,
        message: request.message,
    };

    match mailer.send_contact(&message).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ContactResponse {
                message: "Email succesvol verzonden".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to send contact mail: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Er ging iets mis bij het versturen van de email".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(send_contact_message),
    components(schemas(ContactRequest, ContactResponse))
)]
pub struct ApiDoc;
