use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::create_session;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the admin endpoints
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 500, description = "Admin password not configured", body = ErrorResponse)
    )
)]
pub async fn login(
    State(ctx): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let admin_password = match &ctx.admin_password {
        Some(p) => p,
        None => {
            tracing::error!("ADMIN_PASSWORD environment variable is not set");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Server configuratie fout".to_string(),
                }),
            )
                .into_response();
        }
    };

    if request.password != *admin_password {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Onjuist wachtwoord".to_string(),
            }),
        )
            .into_response();
    }

    match create_session(&ctx.db) {
        Some(token) => (StatusCode::OK, Json(LoginResponse { token })).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Kon geen sessie aanmaken".to_string(),
            }),
        )
            .into_response(),
    }
}
