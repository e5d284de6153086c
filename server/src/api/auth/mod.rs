pub mod login;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(login::login),
    components(schemas(login::LoginRequest, login::LoginResponse))
)]
pub struct ApiDoc;
