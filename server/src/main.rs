mod api;
mod auth;
mod db;
mod images;
mod mailer;
mod models;
mod schema;
mod store;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::post;
use axum::Router;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

use mailer::Mailer;

/// Everything a handler needs, passed explicitly instead of living in
/// ambient globals: the pool, the outbound mailer, and the admin secret.
pub struct AppContext {
    pub db: db::DbPool,
    pub mailer: Option<Mailer>,
    pub admin_password: Option<String>,
}

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let ctx: AppState = Arc::new(AppContext {
        db: db::create_pool(&database_url),
        mailer: Mailer::from_env(),
        admin_password: env::var("ADMIN_PASSWORD").ok(),
    });

    if ctx.mailer.is_none() {
        tracing::warn!("Mail API not configured; contact form submissions will fail");
    }
    if ctx.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD not set; admin login is disabled");
    }

    // Write handlers authenticate through the AdminSession extractor;
    // everything else is public.
    let api_router = Router::new()
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/blog", api::blog::router())
        .nest("/api/images", api::images::router())
        .route("/api/contact", post(api::contact::send_contact_message))
        .route("/api/auth/login", post(api::auth::login::login));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .merge(api_router)
        .merge(swagger_ui)
        .with_state(ctx)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        );

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");
    tracing::info!("OpenAPI spec available at http://localhost:3000/api-docs/openapi.json");

    axum::serve(listener, app).await.unwrap();
}
